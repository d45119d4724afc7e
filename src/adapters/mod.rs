//! Adapters implementing domain ports.
//!
//! Infrastructure implementations of the traits in [`crate::ports`]: a
//! terminal-backed input source for real play and a scripted one for tests
//! and replays.

pub mod scripted_input;
pub mod stdin_input;

pub use scripted_input::ScriptedInput;
pub use stdin_input::StdinInput;
