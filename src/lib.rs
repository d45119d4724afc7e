//! Tic-tac-toe agents that learn by temporal-difference self-play
//!
//! This crate provides:
//! - Tic-tac-toe board with bitmask outcome detection
//! - Value-learning agents with ε-greedy move selection
//! - Game state machine with terminal learning signal and score sheets
//! - Self-play training with a staged exploration schedule
//! - Grouped win-or-draw statistics and policy inspection

pub mod adapters;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod pipeline;
pub mod player;
pub mod ports;
pub mod tictactoe;
pub mod value_learning;

pub use config::AgentConfig;
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, PlayerSlot};
pub use pipeline::{EpsilonSchedule, TrainingConfig, play_against_human, train_agents};
pub use player::{Player, PlayerKind, PlayerSpec};
