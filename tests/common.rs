//! Common test utilities for the integration suite.
#![allow(dead_code)]

use ttt_learner::{
    AgentConfig,
    tictactoe::{BoardState, Mark},
    value_learning::ValueAgent,
};

/// Parse a nine-cell board, `_` for empty.
pub fn board(cells: &str) -> BoardState {
    BoardState::from_string(cells).unwrap()
}

/// Agent with a fixed exploration rate and seed.
pub fn seeded_agent(mark: Mark, epsilon: f64, seed: u64) -> ValueAgent {
    ValueAgent::new(mark, AgentConfig::new().with_epsilon(epsilon).with_seed(seed)).unwrap()
}

/// Every cell in reading order, as a human would type them.
pub const ALL_CELLS: [&str; 9] = [
    "1,1", "1,2", "1,3", "2,1", "2,2", "2,3", "3,1", "3,2", "3,3",
];
