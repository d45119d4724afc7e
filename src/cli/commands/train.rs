//! Train command - Train two agents against each other

use std::{
    cell::RefCell,
    fs::File,
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    adapters::StdinInput,
    analysis::{PlayerStats, explore_policy, render_policy},
    cli::output::{format_number, format_percent, print_kv, print_player_stats, print_section},
    config::AgentConfig,
    game::PlayerSlot,
    pipeline::{
        EpsilonSchedule, JsonlObserver, MetricsObserver, SeatSummary, TrainingConfig,
        TrainingPipeline, TrainingResult, play_against_human,
    },
    player::PlayerSpec,
    tictactoe::{BoardState, Mark},
};

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    training: TrainingResult,
    schedule: String,
    seed: Option<u64>,
    player_x_stats: PlayerStats,
    player_o_stats: PlayerStats,
}

fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Trailing separator or missing filename means a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Train two agents through self-play")]
pub struct TrainArgs {
    /// Number of training games
    #[arg(long, short = 'g', default_value_t = 200_000)]
    pub games: usize,

    /// Exploration schedule as start:epsilon pairs
    #[arg(long, default_value = "0:0.75,0.3:0.2,0.7:0")]
    pub schedule: String,

    /// Exploration rate each agent starts with
    #[arg(long, default_value_t = crate::config::DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Learning rate α for both agents
    #[arg(long, default_value_t = crate::config::DEFAULT_ALPHA)]
    pub alpha: f64,

    /// Keep X's exploration rate fixed instead of following the schedule
    #[arg(long, default_value_t = false)]
    pub fixed_x_epsilon: bool,

    /// Keep O's exploration rate fixed instead of following the schedule
    #[arg(long, default_value_t = false)]
    pub fixed_o_epsilon: bool,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of groups for the win-or-draw statistics
    #[arg(long, default_value_t = 100)]
    pub groups: usize,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Optional file for JSONL per-game records
    #[arg(long)]
    pub observations: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Show each agent's estimates for the moves available on this board
    /// (nine cells, `_` for empty)
    #[arg(long)]
    pub explore: Option<String>,

    /// After training, play against the agent holding this mark (`x` or `o`)
    #[arg(long)]
    pub play_against: Option<String>,

    /// Number of games to play against the trained agent
    #[arg(long, default_value_t = 3)]
    pub play_games: usize,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let schedule: EpsilonSchedule = args.schedule.parse()?;
    if args.groups == 0 {
        return Err(anyhow!("--groups must be at least 1"));
    }
    let play_against = args
        .play_against
        .as_deref()
        .map(|value| {
            value.parse::<PlayerSlot>().map_err(|_| {
                anyhow!("Invalid value '{value}' for --play-against (expected 'x' or 'o')")
            })
        })
        .transpose()?;
    let explore_board = args
        .explore
        .as_deref()
        .map(BoardState::from_string)
        .transpose()?;

    let agent_config = AgentConfig::new()
        .with_epsilon(args.epsilon)
        .with_alpha(args.alpha);
    agent_config.validate()?;

    let config = TrainingConfig {
        num_games: args.games,
        schedule,
        adjust_x_epsilon: !args.fixed_x_epsilon,
        adjust_o_epsilon: !args.fixed_o_epsilon,
        seed: args.seed,
        progress: !args.no_progress,
    };

    print_section("Self-Play Training");
    print_kv("Games", &format_number(config.num_games));
    print_kv("Schedule", &config.schedule.to_string());
    print_kv("Alpha", &args.alpha.to_string());
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let schedule_text = config.schedule.to_string();
    let metrics = Rc::new(RefCell::new(MetricsObserver::new()));
    let mut pipeline =
        TrainingPipeline::new(config).with_observer(Box::new(Rc::clone(&metrics)));
    if let Some(path) = &args.observations {
        pipeline = pipeline.with_observer(Box::new(JsonlObserver::new(path)?));
    }

    let game = pipeline.run(
        PlayerSpec::Agent(agent_config),
        PlayerSpec::Agent(agent_config),
    )?;

    let result = TrainingResult::from_game(&game);
    let x_stats = PlayerStats::for_player(&game, PlayerSlot::PlayerX, args.groups)?;
    let o_stats = PlayerStats::for_player(&game, PlayerSlot::PlayerO, args.groups)?;

    let totals = metrics.borrow().summary();
    print_section("Results");
    print_kv("X wins", &format_number(totals.x_wins));
    print_kv("O wins", &format_number(totals.o_wins));
    print_kv(
        "Draws",
        &format!(
            "{} ({})",
            format_number(totals.draws),
            format_percent(totals.draw_rate)
        ),
    );
    print_seat("Player X", &result.player_x);
    print_player_stats(&x_stats);
    print_seat("Player O", &result.player_o);
    print_player_stats(&o_stats);

    if let Some(raw) = &args.summary {
        let path = sanitize_summary_path(raw);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let summary = TrainingSummaryFile {
            training: result,
            schedule: schedule_text,
            seed: args.seed,
            player_x_stats: x_stats,
            player_o_stats: o_stats,
        };
        let file = File::create(&path)
            .with_context(|| format!("creating summary file {}", path.display()))?;
        to_writer_pretty(file, &summary)?;
        println!("\nSummary written to {}", path.display());
    }

    let (player_x, player_o) = game.into_players();
    let agents = [player_x.into_agent(), player_o.into_agent()];

    if let Some(state) = explore_board {
        for agent in agents.iter().flatten() {
            print_section(&format!("Policy of Player {}", agent.mark()));
            print!("{}", render_policy(&state, &explore_policy(&state, agent)));
        }
    }

    if let Some(slot) = play_against {
        let [agent_x, agent_o] = agents;
        let agent = match slot.mark() {
            Mark::X => agent_x,
            Mark::O => agent_o,
        }
        .ok_or_else(|| anyhow!("No trained agent holds mark {}", slot.mark()))?;

        print_section(&format!("Playing against Player {}", agent.mark()));
        let game = play_against_human(agent, args.play_games, Box::new(StdinInput::new()))?;
        let agent_scores = game.scores(slot);
        let agent_points: f64 = agent_scores.iter().sum();
        print_kv(
            "Agent points",
            &format!("{agent_points} of {}", agent_scores.len()),
        );
    }

    Ok(())
}

fn print_seat(name: &str, seat: &SeatSummary) {
    println!("\n{name}");
    print_kv("Wins", &format!("{} ({})", seat.wins, format_percent(seat.win_rate)));
    print_kv("Draws", &format!("{} ({})", seat.draws, format_percent(seat.draw_rate)));
    print_kv("Losses", &format!("{} ({})", seat.losses, format_percent(seat.loss_rate)));
    if let Some(states) = seat.policy_states {
        print_kv("Policy states", &format_number(states));
    }
}
