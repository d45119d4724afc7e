//! Lazily populated state-value table

use std::collections::HashMap;

use crate::tictactoe::{BoardState, Mark, MoveOutcome, OutcomeEvaluator};

/// Value of a state that is an immediate win for the owner
pub const WIN_VALUE: f64 = 1.0;

/// Value of a drawn or undecided state on first sight
pub const NEUTRAL_VALUE: f64 = 0.5;

/// Decimal places kept after every temporal-difference update
const UPDATE_DECIMALS: usize = 5;

/// Win-probability estimates for one player, keyed by board snapshot
///
/// Entries are created on first lookup and only ever updated afterwards.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    /// board snapshot -> estimated probability of winning
    values: HashMap<BoardState, f64>,
    /// Mark whose wins are valued at 1.0
    mark: Mark,
    /// Learning rate α
    learning_rate: f64,
    evaluator: OutcomeEvaluator,
}

impl PolicyTable {
    pub fn new(mark: Mark, learning_rate: f64) -> Self {
        Self {
            values: HashMap::new(),
            mark,
            learning_rate,
            evaluator: OutcomeEvaluator::STANDARD,
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) {
        self.learning_rate = learning_rate;
    }

    /// Value a state takes the first time it is seen
    fn initial_value(&self, state: &BoardState) -> f64 {
        match self.evaluator.classify(state, self.mark) {
            MoveOutcome::Win => WIN_VALUE,
            MoveOutcome::Draw | MoveOutcome::InProgress => NEUTRAL_VALUE,
        }
    }

    /// Estimated win probability of `state`, inserting it if absent.
    pub fn probability_of(&mut self, state: &BoardState) -> f64 {
        if let Some(&value) = self.values.get(state) {
            return value;
        }
        let value = self.initial_value(state);
        self.values.insert(*state, value);
        value
    }

    /// Stored value without materializing the entry
    pub fn get(&self, state: &BoardState) -> Option<f64> {
        self.values.get(state).copied()
    }

    /// Overwrite the value of a state
    pub fn set(&mut self, state: BoardState, value: f64) {
        self.values.insert(state, value);
    }

    /// Temporal-difference update:
    ///
    /// V(s) ← round(V(s) + α[estimate - V(s)], 5)
    ///
    /// `previous` is normally present already because it was looked up when the
    /// move into it was chosen; an absent entry is initialized first.
    pub fn apply_update(&mut self, previous: &BoardState, current_estimate: f64) -> f64 {
        let old = self.probability_of(previous);
        let new = round_to_precision(old + self.learning_rate * (current_estimate - old));
        self.values.insert(*previous, new);
        log::trace!(
            "TD update for {} on {}: {old} -> {new} (target {current_estimate})",
            self.mark,
            previous.encode()
        );
        new
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Nearest decimal with `UPDATE_DECIMALS` places to the exact binary value.
fn round_to_precision(value: f64) -> f64 {
    format!("{value:.prec$}", prec = UPDATE_DECIMALS)
        .parse()
        .unwrap_or(value)
}
