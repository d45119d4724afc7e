//! Turn-by-turn game management between two players
//!
//! A [`Game`] owns its board and both players. Games are played one after
//! another on the same object: [`Game::reset`] clears the board and each
//! player's last decision state, while learned policies and the per-player
//! score sequences carry over.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    player::{Player, PlayerSpec},
    tictactoe::{BoardState, Mark, OutcomeEvaluator},
    value_learning::NEUTRAL_VALUE,
};

/// Terminal value sent to the receiving player when the game is won
const DECIDED_GAME_VALUE: f64 = 0.0;

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl GameOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            GameOutcome::Win(Mark::X) => "Player X wins!",
            GameOutcome::Win(Mark::O) => "Player O wins!",
            GameOutcome::Draw => "The game is a tie!",
        }
    }

    /// Score entry for the holder of `mark`: 1 win, 0 loss, 0.5 draw
    pub fn score_for(&self, mark: Mark) -> f64 {
        match self {
            GameOutcome::Win(winner) if *winner == mark => 1.0,
            GameOutcome::Win(_) => 0.0,
            GameOutcome::Draw => 0.5,
        }
    }

    /// Value delivered to the player who did not make the final move
    pub fn terminal_value(&self) -> f64 {
        match self {
            GameOutcome::Draw => NEUTRAL_VALUE,
            GameOutcome::Win(_) => DECIDED_GAME_VALUE,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Identifies one of the two seats for score lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    PlayerX,
    PlayerO,
}

impl PlayerSlot {
    pub fn mark(self) -> Mark {
        match self {
            PlayerSlot::PlayerX => Mark::X,
            PlayerSlot::PlayerO => Mark::O,
        }
    }
}

impl From<Mark> for PlayerSlot {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => PlayerSlot::PlayerX,
            Mark::O => PlayerSlot::PlayerO,
        }
    }
}

impl FromStr for PlayerSlot {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "playerx" | "x" => Ok(PlayerSlot::PlayerX),
            "playero" | "o" => Ok(PlayerSlot::PlayerO),
            _ => Err(Error::InvalidPlayerIdentifier {
                input: s.to_string(),
            }),
        }
    }
}

/// Two players, a board and the running score sheet
#[derive(Debug)]
pub struct Game {
    board: BoardState,
    player_x: Player,
    player_o: Player,
    current: Mark,
    x_scores: Vec<f64>,
    o_scores: Vec<f64>,
    print_output: bool,
    evaluator: OutcomeEvaluator,
}

impl Game {
    /// Seat two players. Printing starts enabled.
    ///
    /// # Errors
    ///
    /// Returns error if an adopted player holds the wrong mark or an agent
    /// configuration is invalid.
    pub fn new(player_x: PlayerSpec, player_o: PlayerSpec) -> Result<Self> {
        Ok(Self {
            board: BoardState::new(),
            player_x: player_x.build(Mark::X)?,
            player_o: player_o.build(Mark::O)?,
            current: Mark::X,
            x_scores: Vec::new(),
            o_scores: Vec::new(),
            print_output: true,
            evaluator: OutcomeEvaluator::STANDARD,
        })
    }

    /// Toggle printing of boards, turn announcements and outcomes.
    pub fn set_print(&mut self, print_output: bool) {
        self.print_output = print_output;
    }

    pub fn with_print(mut self, print_output: bool) -> Self {
        self.set_print(print_output);
        self
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Mark of the player whose turn it is
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        match slot {
            PlayerSlot::PlayerX => &self.player_x,
            PlayerSlot::PlayerO => &self.player_o,
        }
    }

    pub fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        match slot {
            PlayerSlot::PlayerX => &mut self.player_x,
            PlayerSlot::PlayerO => &mut self.player_o,
        }
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current.into())
    }

    /// Hand both players back, X first.
    pub fn into_players(self) -> (Player, Player) {
        (self.player_x, self.player_o)
    }

    /// Ask the current player for a move, place it and pass the turn.
    pub fn take_a_turn(&mut self) -> Result<()> {
        let mark = self.current;
        if self.print_output {
            println!("{}'s turn:", self.current_player());
        }

        let board = self.board;
        let position = self.player_mut(mark.into()).select_move(&board)?;
        self.board.place(position, mark)?;
        self.current = mark.opponent();

        if self.print_output {
            println!("{}", self.board);
        }
        Ok(())
    }

    /// Outcome of the current board, without touching the score sheet
    pub fn outcome(&self) -> Option<GameOutcome> {
        let x_total = self.evaluator.total_for(&self.board, Mark::X);
        let o_total = self.evaluator.total_for(&self.board, Mark::O);
        for &mask in self.evaluator.masks() {
            if x_total & mask == mask {
                return Some(GameOutcome::Win(Mark::X));
            }
            if o_total & mask == mask {
                return Some(GameOutcome::Win(Mark::O));
            }
        }
        if self.board.is_full() {
            return Some(GameOutcome::Draw);
        }
        None
    }

    /// Check the board and, if the game is over, append one score entry per
    /// player.
    ///
    /// Every call on a finished board records again; [`Game::play`] calls it
    /// exactly once per game.
    pub fn game_outcome(&mut self) -> Option<GameOutcome> {
        let outcome = self.outcome()?;
        self.x_scores.push(outcome.score_for(Mark::X));
        self.o_scores.push(outcome.score_for(Mark::O));
        Some(outcome)
    }

    /// Deliver the terminal value to the player who did not make the final
    /// move. Turn order has already passed to that player, so it is the
    /// current player here.
    pub fn send_game_end_signal(&mut self, outcome: GameOutcome) {
        let mark = self.current;
        let value = outcome.terminal_value();
        if let Some(updated) = self.player_mut(mark.into()).receive_terminal(value) {
            log::trace!("Player {mark} terminal update toward {value}: now {updated}");
        }
    }

    /// Play one game to completion.
    ///
    /// # Errors
    ///
    /// Returns error if a player cannot produce a move, e.g. a human whose
    /// input closed.
    pub fn play(&mut self) -> Result<GameOutcome> {
        if self.print_output {
            println!("{}", self.board);
        }

        let outcome = loop {
            if let Some(outcome) = self.game_outcome() {
                break outcome;
            }
            self.take_a_turn()?;
        };

        self.send_game_end_signal(outcome);
        log::debug!("game {} finished: {outcome}", self.games_played());
        if self.print_output {
            println!("{outcome}");
        }
        Ok(outcome)
    }

    /// Fresh board, X to move, both players' last decision states cleared.
    pub fn reset(&mut self) {
        self.board = BoardState::new();
        self.player_x.clear_previous_state();
        self.player_o.clear_previous_state();
        self.current = Mark::X;
    }

    /// All recorded scores for a seat
    pub fn scores(&self, slot: PlayerSlot) -> &[f64] {
        match slot {
            PlayerSlot::PlayerX => &self.x_scores,
            PlayerSlot::PlayerO => &self.o_scores,
        }
    }

    /// Score lookup by identifier, `"playerX"` or `"playerO"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPlayerIdentifier`] for anything else.
    pub fn player_score(&self, player: &str) -> Result<&[f64]> {
        Ok(self.scores(player.parse()?))
    }

    pub fn games_played(&self) -> usize {
        self.x_scores.len()
    }
}
