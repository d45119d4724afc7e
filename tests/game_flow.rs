//! Whole games between scripted humans and agents

use std::{cell::RefCell, rc::Rc};

use ttt_learner::{
    AgentConfig, Error, Game, GameOutcome, PlayerSlot, PlayerSpec, adapters::ScriptedInput,
    player::INVALID_MOVE_MESSAGE, tictactoe::Mark,
};

mod common;

use common::{ALL_CELLS, seeded_agent};

fn scripted(lines: &[&str]) -> PlayerSpec {
    PlayerSpec::Human(Box::new(ScriptedInput::new(lines.iter().copied())))
}

#[test]
fn scripted_game_ends_in_tie() {
    // Final board XOX / XOO / OXX
    let mut game = Game::new(
        scripted(&["1,1", "1,3", "2,1", "3,2", "3,3"]),
        scripted(&["1,2", "2,2", "2,3", "3,1"]),
    )
    .unwrap()
    .with_print(false);

    assert_eq!(game.play().unwrap(), GameOutcome::Draw);
    assert_eq!(game.player_score("playerX").unwrap(), &[0.5]);
    assert_eq!(game.player_score("playerO").unwrap(), &[0.5]);
}

#[test]
fn o_wins_down_the_middle_column() {
    let mut game = Game::new(
        scripted(&["1,1", "1,3", "3,3"]),
        scripted(&["1,2", "2,2", "3,2"]),
    )
    .unwrap()
    .with_print(false);

    assert_eq!(game.play().unwrap(), GameOutcome::Win(Mark::O));
    assert_eq!(game.scores(PlayerSlot::PlayerX), &[0.0]);
    assert_eq!(game.scores(PlayerSlot::PlayerO), &[1.0]);
    // X did not move last, so it is the current player after the game
    assert_eq!(game.current_mark(), Mark::X);
}

#[test]
fn losing_agent_receives_terminal_value() {
    // The terminal value goes to whoever did not move last: X after an O
    // win, the human O after an X win or a full-board draw.
    let agent = seeded_agent(Mark::X, 0.0, 3);
    let mut game = Game::new(PlayerSpec::from(agent), scripted(&ALL_CELLS))
        .unwrap()
        .with_print(false);

    let outcome = game.play().unwrap();
    let agent = game.player(PlayerSlot::PlayerX).as_agent().unwrap();
    match outcome {
        GameOutcome::Win(Mark::X) | GameOutcome::Draw => {
            assert!(agent.previous_state().is_some())
        }
        GameOutcome::Win(Mark::O) => assert!(agent.previous_state().is_none()),
    }
}

#[test]
fn invalid_entries_are_reported_and_retried() {
    let x_input = Rc::new(RefCell::new(ScriptedInput::new([
        "middle", "2,2", "(1,1)", "0,0", "1,1", "3,3",
    ])));
    let mut game = Game::new(
        PlayerSpec::Human(Box::new(Rc::clone(&x_input))),
        scripted(&["1,2", "1,3"]),
    )
    .unwrap()
    .with_print(false);

    assert_eq!(game.play().unwrap(), GameOutcome::Win(Mark::X));
    let x_input = x_input.borrow();
    assert_eq!(x_input.rejections(), &[INVALID_MOVE_MESSAGE; 3]);
    assert_eq!(x_input.remaining(), 0);
}

#[test]
fn closed_input_aborts_game() {
    let mut game = Game::new(scripted(&["1,1"]), scripted(&[]))
        .unwrap()
        .with_print(false);
    assert!(matches!(game.play(), Err(Error::InputClosed)));
    assert_eq!(game.games_played(), 0);
}

#[test]
fn consecutive_games_keep_scores_and_policies() {
    let mut game = Game::new(
        PlayerSpec::Agent(AgentConfig::new().with_epsilon(0.5).with_seed(1)),
        PlayerSpec::Agent(AgentConfig::new().with_epsilon(0.5).with_seed(2)),
    )
    .unwrap()
    .with_print(false);

    let mut learned = 0;
    for round in 1..=10 {
        game.play().unwrap();
        game.reset();
        let size = game.player(PlayerSlot::PlayerX).as_agent().unwrap().policy().len();
        assert!(size >= learned);
        learned = size;
        assert_eq!(game.games_played(), round);
    }

    let (player_x, player_o) = game.into_players();
    assert_eq!(player_x.mark(), Mark::X);
    assert_eq!(player_o.to_string(), "Player O");
}

#[test]
fn trained_agent_can_be_reseated() {
    let mut game = Game::new(
        PlayerSpec::Agent(AgentConfig::new().with_seed(5)),
        PlayerSpec::Agent(AgentConfig::new().with_seed(6)),
    )
    .unwrap()
    .with_print(false);
    game.play().unwrap();
    let (player_x, player_o) = game.into_players();

    let swapped = Game::new(PlayerSpec::from(player_o), PlayerSpec::agent());
    assert!(matches!(swapped, Err(Error::MarkMismatch { .. })));

    let reseated = Game::new(PlayerSpec::from(player_x), PlayerSpec::agent()).unwrap();
    assert_eq!(reseated.games_played(), 0);
}
