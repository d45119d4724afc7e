//! CLI infrastructure for the tic-tac-toe learner
//!
//! This module provides the command-line interface for training agents
//! through self-play and playing against them.

pub mod commands;
pub mod output;
