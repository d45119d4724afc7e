//! Self-play training driver

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{observers::ProgressObserver, schedule::EpsilonSchedule};
use crate::{
    Result,
    game::{Game, PlayerSlot},
    player::PlayerSpec,
    ports::Observer,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of games to play back-to-back
    pub num_games: usize,

    /// Exploration rate by stage of the run
    pub schedule: EpsilonSchedule,

    /// Whether the schedule drives X's exploration rate
    pub adjust_x_epsilon: bool,

    /// Whether the schedule drives O's exploration rate
    pub adjust_o_epsilon: bool,

    /// Random seed; X gets `seed`, O gets `seed + 1`
    pub seed: Option<u64>,

    /// Show a progress bar while training
    pub progress: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: 200_000,
            schedule: EpsilonSchedule::default(),
            adjust_x_epsilon: true,
            adjust_o_epsilon: true,
            seed: None,
            progress: false,
        }
    }
}

/// Per-seat totals of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatSummary {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
    /// Number of states in the agent's policy, if the seat is an agent
    pub policy_states: Option<usize>,
}

impl SeatSummary {
    fn from_game(game: &Game, slot: PlayerSlot) -> Self {
        let scores = game.scores(slot);
        let wins = scores.iter().filter(|&&s| s == 1.0).count();
        let losses = scores.iter().filter(|&&s| s == 0.0).count();
        let draws = scores.len() - wins - losses;
        let rate = |count: usize| {
            if scores.is_empty() {
                0.0
            } else {
                count as f64 / scores.len() as f64
            }
        };

        Self {
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            policy_states: game
                .player(slot)
                .as_agent()
                .map(|agent| agent.policy().len()),
        }
    }
}

/// Result of a training run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total games played
    pub total_games: usize,
    pub player_x: SeatSummary,
    pub player_o: SeatSummary,
}

impl TrainingResult {
    /// Summarize every game recorded on `game`
    pub fn from_game(game: &Game) -> Self {
        Self {
            total_games: game.games_played(),
            player_x: SeatSummary::from_game(game, PlayerSlot::PlayerX),
            player_o: SeatSummary::from_game(game, PlayerSlot::PlayerO),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays many games between two players on one [`Game`]
pub struct TrainingPipeline {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl TrainingPipeline {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        let mut observers: Vec<Box<dyn Observer>> = Vec::new();
        if config.progress {
            observers.push(Box::new(ProgressObserver::new()));
        }
        Self { config, observers }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run the configured number of games and hand back the game object,
    /// whose players carry the learned policies and whose score sheets
    /// hold one entry per game.
    ///
    /// # Errors
    ///
    /// Returns error if a seat cannot be built, a player fails to move, or an
    /// observer fails.
    pub fn run(&mut self, player_x: PlayerSpec, player_o: PlayerSpec) -> Result<Game> {
        let mut game = Game::new(player_x, player_o)?.with_print(false);
        self.seed_players(&mut game);

        let total = self.config.num_games;
        for observer in &mut self.observers {
            observer.on_training_start(total)?;
        }
        log::info!(
            "training {total} games with exploration schedule {}",
            self.config.schedule
        );

        let mut current_epsilon = None;
        for game_num in 1..=total {
            let epsilon = self.config.schedule.epsilon_for(game_num, total);
            if current_epsilon != Some(epsilon) {
                log::info!("game {game_num}/{total}: exploration rate {epsilon}");
                self.apply_epsilon(&mut game, epsilon)?;
                current_epsilon = Some(epsilon);
            }

            let outcome = game.play()?;
            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
            game.reset();
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }
        log::info!("training finished after {} games", game.games_played());

        Ok(game)
    }

    fn apply_epsilon(&self, game: &mut Game, epsilon: f64) -> Result<()> {
        let seats = [
            (PlayerSlot::PlayerX, self.config.adjust_x_epsilon),
            (PlayerSlot::PlayerO, self.config.adjust_o_epsilon),
        ];
        for (slot, adjust) in seats {
            if !adjust {
                continue;
            }
            if let Some(agent) = game.player_mut(slot).as_agent_mut() {
                agent.set_epsilon(epsilon)?;
            }
        }
        Ok(())
    }

    fn seed_players(&self, game: &mut Game) {
        if let Some(seed) = self.config.seed {
            for (offset, slot) in [PlayerSlot::PlayerX, PlayerSlot::PlayerO]
                .into_iter()
                .enumerate()
            {
                if let Some(agent) = game.player_mut(slot).as_agent_mut() {
                    agent.set_rng_seed(seed.wrapping_add(offset as u64));
                }
            }
        }
    }
}

/// Train two players against each other with `config` and return the game.
pub fn train_agents(
    player_x: PlayerSpec,
    player_o: PlayerSpec,
    config: TrainingConfig,
) -> Result<Game> {
    TrainingPipeline::new(config).run(player_x, player_o)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AgentConfig, pipeline::schedule::SchedulePhase};

    fn small_config(num_games: usize) -> TrainingConfig {
        TrainingConfig {
            num_games,
            seed: Some(42),
            ..TrainingConfig::default()
        }
    }

    #[test]
    fn test_training_records_one_score_per_game() {
        let game = train_agents(PlayerSpec::agent(), PlayerSpec::agent(), small_config(60)).unwrap();
        assert_eq!(game.games_played(), 60);
        let x = game.scores(PlayerSlot::PlayerX);
        let o = game.scores(PlayerSlot::PlayerO);
        assert!(x.iter().zip(o).all(|(a, b)| a + b == 1.0));
    }

    #[test]
    fn test_schedule_ends_greedy_for_adjusted_players_only() {
        let config = TrainingConfig {
            adjust_o_epsilon: false,
            ..small_config(20)
        };
        let game = train_agents(
            PlayerSpec::agent(),
            PlayerSpec::Agent(AgentConfig::new().with_epsilon(0.4)),
            config,
        )
        .unwrap();

        let x = game.player(PlayerSlot::PlayerX).as_agent().unwrap();
        let o = game.player(PlayerSlot::PlayerO).as_agent().unwrap();
        assert_eq!(x.epsilon(), 0.0);
        assert_eq!(o.epsilon(), 0.4);
    }

    #[test]
    fn test_zero_games_returns_untouched_game() {
        let game = train_agents(PlayerSpec::agent(), PlayerSpec::agent(), small_config(0)).unwrap();
        assert_eq!(game.games_played(), 0);
    }

    #[test]
    fn test_training_result_summarizes_scores() {
        let schedule = EpsilonSchedule::new(vec![SchedulePhase::new(0.0, 1.0)]).unwrap();
        let config = TrainingConfig {
            schedule,
            ..small_config(40)
        };
        let game = train_agents(PlayerSpec::agent(), PlayerSpec::agent(), config).unwrap();
        let result = TrainingResult::from_game(&game);

        assert_eq!(result.total_games, 40);
        assert_eq!(result.player_x.wins, result.player_o.losses);
        assert_eq!(result.player_x.draws, result.player_o.draws);
        assert_eq!(
            result.player_x.wins + result.player_x.draws + result.player_x.losses,
            40
        );
        assert!(result.player_x.policy_states.unwrap() > 0);
    }

    #[test]
    fn test_training_result_save_and_load() {
        let game = train_agents(PlayerSpec::agent(), PlayerSpec::agent(), small_config(10)).unwrap();
        let result = TrainingResult::from_game(&game);

        let temp_file = tempfile::NamedTempFile::new().unwrap();
        result.save(temp_file.path()).unwrap();
        let loaded = TrainingResult::load(temp_file.path()).unwrap();
        assert_eq!(loaded.total_games, 10);
        assert_eq!(loaded.player_o, result.player_o);
    }
}
