//! Interactive play between a trained agent and a person

use crate::{
    Result,
    game::Game,
    player::PlayerSpec,
    ports::InputSource,
    tictactoe::Mark,
    value_learning::ValueAgent,
};

/// Seat `agent` at its own mark, a human reading from `input` at the other,
/// and play `n_games` printed games in a row.
///
/// The agent keeps its exploration rate; set it to 0 beforehand for purely
/// greedy play. Learning continues during these games.
///
/// # Errors
///
/// Returns error if the input source closes mid-game.
pub fn play_against_human(
    agent: ValueAgent,
    n_games: usize,
    input: Box<dyn InputSource>,
) -> Result<Game> {
    let agent_mark = agent.mark();
    let (player_x, player_o) = match agent_mark {
        Mark::X => (PlayerSpec::from(agent), PlayerSpec::Human(input)),
        Mark::O => (PlayerSpec::Human(input), PlayerSpec::from(agent)),
    };

    let mut game = Game::new(player_x, player_o)?.with_print(true);
    log::info!("playing {n_games} games against Player {agent_mark}");
    for _ in 0..n_games {
        game.play()?;
        game.reset();
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, adapters::ScriptedInput, config::AgentConfig, game::PlayerSlot};

    // Every cell in reading order, so the human always finds a free one.
    const ALL_CELLS: [&str; 9] = ["1,1", "1,2", "1,3", "2,1", "2,2", "2,3", "3,1", "3,2", "3,3"];

    #[test]
    fn test_agent_seated_as_o_faces_human_x() {
        let agent = ValueAgent::new(Mark::O, AgentConfig::new().with_epsilon(0.0).with_seed(1))
            .unwrap();
        let game = play_against_human(agent, 1, Box::new(ScriptedInput::new(ALL_CELLS))).unwrap();

        assert_eq!(game.games_played(), 1);
        assert!(game.player(PlayerSlot::PlayerO).as_agent().is_some());
        assert!(game.player(PlayerSlot::PlayerX).as_agent().is_none());
    }

    #[test]
    fn test_agent_keeps_its_seat_as_x() {
        let agent = ValueAgent::new(Mark::X, AgentConfig::new().with_seed(4)).unwrap();
        let game = play_against_human(agent, 1, Box::new(ScriptedInput::new(ALL_CELLS))).unwrap();

        assert!(game.player(PlayerSlot::PlayerX).as_agent().is_some());
        let score = game.scores(PlayerSlot::PlayerX)[0];
        assert!([0.0, 0.5, 1.0].contains(&score));
    }

    #[test]
    fn test_closed_input_ends_session_with_error() {
        let agent = ValueAgent::new(Mark::X, AgentConfig::new().with_seed(4)).unwrap();
        let result = play_against_human(agent, 2, Box::new(ScriptedInput::default()));
        assert!(matches!(result, Err(Error::InputClosed)));
    }

    #[test]
    fn test_zero_games_plays_nothing() {
        let agent = ValueAgent::new(Mark::O, AgentConfig::new()).unwrap();
        let game = play_against_human(agent, 0, Box::new(ScriptedInput::default())).unwrap();
        assert_eq!(game.games_played(), 0);
    }
}
