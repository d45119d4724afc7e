//! Tic-Tac-Toe board and outcome detection

pub mod board;
pub mod lines;
pub mod outcome;

pub use board::{BoardState, Cell, Mark};
pub use lines::{WINNING_LINES, line_mask, line_masks};
pub use outcome::{CELL_WEIGHTS, MoveOutcome, OutcomeEvaluator, WIN_MASKS};
