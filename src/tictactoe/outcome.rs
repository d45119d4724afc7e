//! Bitmask outcome evaluation
//!
//! Each cell carries the weight `2^index`. Summing the weights of the cells a
//! mark occupies gives a 9-bit total, and a line is complete exactly when
//! `total & mask == mask` for that line's mask.

use serde::{Deserialize, Serialize};

use super::{BoardState, Mark, WINNING_LINES, lines::line_masks};

/// Per-position weights, one bit per cell
pub const CELL_WEIGHTS: [u16; 9] = [1, 2, 4, 8, 16, 32, 64, 128, 256];

/// Rows 0-2/3-5/6-8, columns 0,3,6 / 1,4,7 / 2,5,8, diagonals 0,4,8 / 2,4,6
pub const WIN_MASKS: [u16; 8] = line_masks(&WINNING_LINES);

/// Result of classifying a board from one mark's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    Win,
    Draw,
    InProgress,
}

/// Win/draw detector over fixed weight and mask tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeEvaluator {
    weights: [u16; 9],
    masks: [u16; 8],
}

impl OutcomeEvaluator {
    pub const STANDARD: OutcomeEvaluator = OutcomeEvaluator {
        weights: CELL_WEIGHTS,
        masks: WIN_MASKS,
    };

    pub fn masks(&self) -> &[u16; 8] {
        &self.masks
    }

    /// Sum of the weights of every cell holding `mark`
    pub fn total_for(&self, state: &BoardState, mark: Mark) -> u16 {
        let target = mark.to_cell();
        state
            .cells
            .iter()
            .zip(self.weights)
            .filter(|(cell, _)| **cell == target)
            .map(|(_, weight)| weight)
            .sum()
    }

    /// True if the 9-bit total covers any winning line
    pub fn completes_line(&self, total: u16) -> bool {
        self.masks.iter().any(|&mask| total & mask == mask)
    }

    /// Classify `state` for the player holding `mark`.
    ///
    /// A full board where `mark` has no line is a draw even if the opponent
    /// holds one; callers that care check both marks.
    pub fn classify(&self, state: &BoardState, mark: Mark) -> MoveOutcome {
        if self.completes_line(self.total_for(state, mark)) {
            MoveOutcome::Win
        } else if state.is_full() {
            MoveOutcome::Draw
        } else {
            MoveOutcome::InProgress
        }
    }
}

impl Default for OutcomeEvaluator {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Cell, WINNING_LINES, lines::has_won};

    fn board(s: &str) -> BoardState {
        BoardState::from_string(s).unwrap()
    }

    #[test]
    fn test_total_for_sums_cell_weights() {
        let state = board("XX_OO___X");
        let evaluator = OutcomeEvaluator::STANDARD;
        assert_eq!(evaluator.total_for(&state, Mark::X), 1 + 2 + 256);
        assert_eq!(evaluator.total_for(&state, Mark::O), 8 + 16);
    }

    #[test]
    fn test_every_line_is_a_win_and_nothing_else() {
        let evaluator = OutcomeEvaluator::STANDARD;
        for line in WINNING_LINES {
            let mut cells = [Cell::Empty; 9];
            for idx in line {
                cells[idx] = Cell::O;
            }
            let state = BoardState::from_cells(cells);
            assert_eq!(evaluator.classify(&state, Mark::O), MoveOutcome::Win);
            assert_eq!(evaluator.classify(&state, Mark::X), MoveOutcome::InProgress);
        }

        // Exhaustive: any triple of cells is a win iff it is one of the 8 lines
        for a in 0..9 {
            for b in (a + 1)..9 {
                for c in (b + 1)..9 {
                    let mut cells = [Cell::Empty; 9];
                    cells[a] = Cell::X;
                    cells[b] = Cell::X;
                    cells[c] = Cell::X;
                    let state = BoardState::from_cells(cells);
                    let is_line = WINNING_LINES.contains(&[a, b, c]);
                    assert_eq!(
                        evaluator.classify(&state, Mark::X) == MoveOutcome::Win,
                        is_line,
                        "triple {a},{b},{c}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let evaluator = OutcomeEvaluator::STANDARD;
        let state = board("XOXXOOOXX");
        assert_eq!(evaluator.classify(&state, Mark::X), MoveOutcome::Draw);
        assert_eq!(evaluator.classify(&state, Mark::O), MoveOutcome::Draw);
    }

    #[test]
    fn test_bitmask_agrees_with_cellwise_check_on_all_boards() {
        let evaluator = OutcomeEvaluator::STANDARD;
        for code in 0..19_683u32 {
            let mut cells = [Cell::Empty; 9];
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = match rest % 3 {
                    0 => Cell::Empty,
                    1 => Cell::X,
                    _ => Cell::O,
                };
                rest /= 3;
            }
            let state = BoardState::from_cells(cells);
            for mark in [Mark::X, Mark::O] {
                let expected = if has_won(&cells, mark) {
                    MoveOutcome::Win
                } else if state.is_full() {
                    MoveOutcome::Draw
                } else {
                    MoveOutcome::InProgress
                };
                assert_eq!(evaluator.classify(&state, mark), expected);
            }
        }
    }
}
