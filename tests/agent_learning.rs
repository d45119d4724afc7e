//! Learning behaviour of a single agent, driven through the public API

use ttt_learner::{
    tictactoe::{Mark, MoveOutcome, OutcomeEvaluator},
    value_learning::{Decision, NEUTRAL_VALUE, WIN_VALUE},
};

mod common;

use common::{board, seeded_agent};

#[test]
fn greedy_agent_completes_open_row() {
    let state = board("XX_OO____");
    for seed in 0..10 {
        let mut agent = seeded_agent(Mark::X, 0.0, seed);
        let position = agent.select_move(&state).unwrap();

        assert_eq!(position, 2);
        let winning = state.with_mark(2, Mark::X);
        assert_eq!(agent.policy().get(&winning), Some(WIN_VALUE));
        for other in [5, 6, 7, 8] {
            assert_eq!(
                agent.policy().get(&state.with_mark(other, Mark::X)),
                Some(NEUTRAL_VALUE)
            );
        }
    }
}

#[test]
fn winning_successor_classified_by_evaluator() {
    let evaluator = OutcomeEvaluator::STANDARD;
    let state = board("XX_OO____");
    assert_eq!(
        evaluator.classify(&state.with_mark(2, Mark::X), Mark::X),
        MoveOutcome::Win
    );
    assert_eq!(
        evaluator.classify(&state.with_mark(5, Mark::X), Mark::X),
        MoveOutcome::InProgress
    );
}

/// Play X's first move, set its value to 0, then let O reply and X move again.
fn second_move_update(epsilon: f64, seed: u64) -> (f64, Option<Decision>) {
    let mut agent = seeded_agent(Mark::X, epsilon, seed);
    let start = board("_________");
    let first = agent.select_move(&start).unwrap();
    let previous = start.with_mark(first, Mark::X);
    agent.policy_mut().set(previous, 0.0);

    let mut reply = previous;
    let o_move = reply.empty_positions()[0];
    reply.place(o_move, Mark::O).unwrap();
    agent.select_move(&reply).unwrap();

    (
        agent.policy().get(&previous).unwrap(),
        agent.last_decision(),
    )
}

#[test]
fn exploring_moves_never_update_previous_state() {
    for seed in 0..25 {
        let (value, decision) = second_move_update(1.0, seed);
        assert_eq!(value, 0.0);
        assert_eq!(decision, Some(Decision::Explore));
    }
}

#[test]
fn greedy_moves_always_update_previous_state() {
    for seed in 0..25 {
        let (value, decision) = second_move_update(0.0, seed);
        assert!((value - 0.05).abs() < 1e-12, "seed {seed}: {value}");
        assert_eq!(decision, Some(Decision::Exploit));
    }
}

#[test]
fn updates_are_rounded_to_five_decimals() {
    let mut agent = seeded_agent(Mark::O, 0.0, 1);
    agent.set_alpha(0.3).unwrap();
    let state = board("X___O____");
    agent.policy_mut().set(state, 0.123456);

    let updated = agent.policy_mut().apply_update(&state, 0.987654);
    // 0.123456 + 0.3 * 0.864198 = 0.3827154
    assert_eq!(updated, 0.38272);
}
