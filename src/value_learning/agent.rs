//! ε-greedy learning agent
//!
//! The agent values board states rather than state-action pairs: a move is
//! scored by the estimated win probability of the board it produces. Between
//! its own successive decisions the agent backs the value of the best
//! successor it just found up into the state it chose last turn.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    config::{AgentConfig, validate_learning_rate, validate_rate},
    error::{Error, Result},
    tictactoe::{BoardState, Mark},
    value_learning::policy_table::PolicyTable,
};

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// How the last move was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Uniformly random empty cell
    Explore,
    /// Best known successor, ties broken at random
    Exploit,
}

/// Tabular agent that learns win probabilities through self-play
#[derive(Debug, Clone)]
pub struct ValueAgent {
    mark: Mark,
    policy: PolicyTable,
    epsilon: f64,
    /// State this agent produced with its last move in the current game
    previous_state: Option<BoardState>,
    last_decision: Option<Decision>,
    rng: StdRng,
}

impl ValueAgent {
    /// Create a new agent with an empty policy.
    ///
    /// # Errors
    ///
    /// Returns error if ε or α lie outside [0, 1].
    pub fn new(mark: Mark, config: AgentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            mark,
            policy: PolicyTable::new(mark, config.alpha),
            epsilon: config.epsilon,
            previous_state: None,
            last_decision: None,
            rng: build_rng(config.seed),
        })
    }

    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Set the rate at which moves are picked at random instead of greedily.
    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<()> {
        validate_rate("epsilon", epsilon)?;
        self.epsilon = epsilon;
        Ok(())
    }

    pub fn alpha(&self) -> f64 {
        self.policy.learning_rate()
    }

    /// Set how far each update moves a stored estimate toward its target.
    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        validate_learning_rate(alpha)?;
        self.policy.set_learning_rate(alpha);
        Ok(())
    }

    pub fn policy(&self) -> &PolicyTable {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut PolicyTable {
        &mut self.policy
    }

    pub fn previous_state(&self) -> Option<BoardState> {
        self.previous_state
    }

    pub fn clear_previous_state(&mut self) {
        self.previous_state = None;
    }

    pub fn last_decision(&self) -> Option<Decision> {
        self.last_decision
    }

    /// Choose an empty cell on `board` and remember the resulting state.
    ///
    /// # Errors
    ///
    /// Returns error if the board has no empty cell.
    pub fn select_move(&mut self, board: &BoardState) -> Result<usize> {
        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }

        let position = if self.rng.random::<f64>() < self.epsilon {
            let position = *moves.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;
            // Materializes the successor's entry; the value itself is unused.
            self.policy.probability_of(&board.with_mark(position, self.mark));
            self.last_decision = Some(Decision::Explore);
            position
        } else {
            let position = self.greedy_move(board, &moves)?;
            self.last_decision = Some(Decision::Exploit);
            position
        };

        self.previous_state = Some(board.with_mark(position, self.mark));
        Ok(position)
    }

    /// Pick among the successors with the highest estimate and run the
    /// within-game update on the previous decision state.
    fn greedy_move(&mut self, board: &BoardState, moves: &[usize]) -> Result<usize> {
        let mut max_probability = 0.0;
        let mut best_moves = Vec::with_capacity(moves.len());

        for &position in moves {
            let probability = self.policy.probability_of(&board.with_mark(position, self.mark));
            if probability > max_probability {
                best_moves.clear();
                best_moves.push(position);
                max_probability = probability;
            } else if probability == max_probability {
                best_moves.push(position);
            }
        }

        log::debug!(
            "Player {} best moves {:?} at probability {}",
            self.mark,
            best_moves,
            max_probability
        );

        let position = *best_moves.choose(&mut self.rng).ok_or(Error::NoValidMoves)?;

        if let Some(previous) = self.previous_state {
            self.policy.apply_update(&previous, max_probability);
        }

        Ok(position)
    }

    /// Feed the final value of a game back into the last decision state.
    ///
    /// Returns the updated estimate, or `None` if the agent has not moved
    /// since its previous state was last cleared. The previous state is
    /// consumed either way.
    pub fn apply_terminal(&mut self, value: f64) -> Option<f64> {
        self.previous_state
            .take()
            .map(|previous| self.policy.apply_update(&previous, value))
    }
}
