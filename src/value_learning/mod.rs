//! Temporal-difference learning over board-state values
//!
//! Each agent owns a [`PolicyTable`] mapping board snapshots to its estimated
//! probability of winning from there. Unseen states start at 1.0 when they
//! are an immediate win for the agent and 0.5 otherwise. Estimates are
//! refined with the update
//!
//! ```text
//! V(s) ← V(s) + α [V(s') - V(s)]
//! ```
//!
//! where `s` is the state the agent produced with its previous move and `s'`
//! is the best successor found on its next greedy turn, or the terminal
//! value once the game ends.
//!
//! ## Usage Example
//!
//! ```no_run
//! use ttt_learner::{
//!     AgentConfig,
//!     tictactoe::{BoardState, Mark},
//!     value_learning::ValueAgent,
//! };
//!
//! let mut agent = ValueAgent::new(Mark::X, AgentConfig::new().with_seed(1)).unwrap();
//! let position = agent.select_move(&BoardState::new()).unwrap();
//! assert!(position < 9);
//! ```

pub mod agent;
pub mod policy_table;

pub use agent::{Decision, ValueAgent};
pub use policy_table::{NEUTRAL_VALUE, PolicyTable, WIN_VALUE};
