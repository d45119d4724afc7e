//! Observer port - abstraction for watching a training run

use std::{cell::RefCell, rc::Rc};

use crate::{Result, game::GameOutcome};

/// Observer trait for monitoring training
///
/// The methods are called in order:
/// 1. `on_training_start(total_games)` - Once at the beginning
/// 2. `on_game_end(game_num, outcome)` - After every completed game
/// 3. `on_training_end()` - Once at the end
///
/// All methods default to no-ops.
pub trait Observer {
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Shared observers stay readable by the caller after a run.
impl<T: Observer> Observer for Rc<RefCell<T>> {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        self.borrow_mut().on_training_start(total_games)
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.borrow_mut().on_game_end(game_num, outcome)
    }

    fn on_training_end(&mut self) -> Result<()> {
        self.borrow_mut().on_training_end()
    }
}
