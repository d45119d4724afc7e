//! Pre-recorded input for tests and replays.

use std::collections::VecDeque;

use crate::{Error, Result, ports::InputSource};

/// Serves a fixed list of lines and records what was rejected.
///
/// # Examples
///
/// ```
/// use ttt_learner::{Error, adapters::ScriptedInput, ports::InputSource};
///
/// let mut input = ScriptedInput::new(["1,1"]);
/// assert_eq!(input.read_move("").unwrap(), "1,1");
/// assert!(matches!(input.read_move(""), Err(Error::InputClosed)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: usize,
    rejections: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: 0,
            rejections: Vec::new(),
        }
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Number of times a move was requested
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    /// Rejection messages in the order they were reported
    pub fn rejections(&self) -> &[String] {
        &self.rejections
    }
}

impl InputSource for ScriptedInput {
    fn read_move(&mut self, _prompt: &str) -> Result<String> {
        self.prompts += 1;
        self.lines.pop_front().ok_or(Error::InputClosed)
    }

    fn reject(&mut self, message: &str) {
        self.rejections.push(message.to_string());
    }
}
