//! Analysis tools for trained agents
//!
//! This module provides grouped win-or-draw statistics over score sequences
//! and a listing of an agent's estimates for the moves available on a board.

pub mod policy;
pub mod stats;

pub use policy::{MoveEstimate, explore_policy, render_policy};
pub use stats::{PlayerStats, ScoreRow};
