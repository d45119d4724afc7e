//! Inspect what an agent believes about the moves available from a board

use serde::Serialize;

use crate::{tictactoe::BoardState, value_learning::ValueAgent};

/// The agent's view of one candidate move
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveEstimate {
    pub position: usize,
    /// Board after the agent marks `position`
    pub successor: BoardState,
    /// Stored win probability, `None` if the successor was never visited
    pub probability: Option<f64>,
}

/// List every empty cell of `state` with the stored estimate for the board
/// the agent would produce there. The policy is only read, never filled in.
pub fn explore_policy(state: &BoardState, agent: &ValueAgent) -> Vec<MoveEstimate> {
    state
        .empty_positions()
        .into_iter()
        .map(|position| {
            let successor = state.with_mark(position, agent.mark());
            MoveEstimate {
                position,
                successor,
                probability: agent.policy().get(&successor),
            }
        })
        .collect()
}

/// Text listing of the starting board followed by each successor and its
/// estimate.
pub fn render_policy(state: &BoardState, estimates: &[MoveEstimate]) -> String {
    let moves: String = estimates
        .iter()
        .map(|estimate| {
            let probability = match estimate.probability {
                Some(probability) => format!("{probability:.17}"),
                None => "unexplored".to_string(),
            };
            format!("{}Win probability = {probability}\n\n", estimate.successor)
        })
        .collect();
    format!("{state}Initial board state\n\n{moves}")
}
