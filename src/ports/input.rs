//! Input port - source of moves typed by a human player

use std::{cell::RefCell, rc::Rc};

use crate::Result;

/// Line-oriented source of human move entries.
///
/// The game never interprets a failure to parse as fatal; it only stops when
/// the source itself cannot produce any more lines.
///
/// # Examples
///
/// ```
/// use ttt_learner::{adapters::ScriptedInput, ports::InputSource};
///
/// let mut input = ScriptedInput::new(["2,2"]);
/// assert_eq!(input.read_move("Your move: ").unwrap(), "2,2");
/// ```
pub trait InputSource {
    /// Show `prompt` and return the next line of input without its newline.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InputClosed`] when no more input will arrive.
    fn read_move(&mut self, prompt: &str) -> Result<String>;

    /// Report a rejected entry before the next prompt.
    fn reject(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Shared handle, so a caller can keep inspecting a source it handed to a
/// player.
impl<T: InputSource + ?Sized> InputSource for Rc<RefCell<T>> {
    fn read_move(&mut self, prompt: &str) -> Result<String> {
        self.borrow_mut().read_move(prompt)
    }

    fn reject(&mut self, message: &str) {
        self.borrow_mut().reject(message);
    }
}
