//! Players: humans at a terminal or learning agents
//!
//! A game seat is filled from a [`PlayerSpec`]: either build a fresh player
//! of a given kind, or adopt an existing one (keeping its learned policy).
//! Adopted players are checked against the seat's mark.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    adapters::StdinInput,
    config::AgentConfig,
    ports::InputSource,
    tictactoe::{BoardState, Mark},
    value_learning::ValueAgent,
};

pub const MOVE_PROMPT: &str =
    "Enter the row and column you want to make a mark in, using the format x,y ";

pub const INVALID_MOVE_MESSAGE: &str = "Invalid move.\n";

/// Parse a 1-indexed `row,column` entry into a board index.
///
/// Surrounding whitespace and one pair of parentheses are tolerated, so
/// `"2,3"`, `" 2 , 3 "` and `"(2,3)"` all give index 5.
pub fn parse_move(input: &str) -> Option<usize> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    let mut parts = inner.split(',');
    let row: usize = parts.next()?.trim().parse().ok()?;
    let column: usize = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if !(1..=3).contains(&row) || !(1..=3).contains(&column) {
        return None;
    }
    Some((row - 1) * 3 + column - 1)
}

/// A person entering moves through an [`InputSource`]
pub struct HumanPlayer {
    mark: Mark,
    input: Box<dyn InputSource>,
}

impl HumanPlayer {
    pub fn new(mark: Mark, input: Box<dyn InputSource>) -> Self {
        Self { mark, input }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Prompt until the entry parses and names an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if the board is full or the input source closes.
    pub fn select_move(&mut self, board: &BoardState) -> Result<usize> {
        if board.is_full() {
            return Err(Error::NoValidMoves);
        }
        loop {
            let line = self.input.read_move(MOVE_PROMPT)?;
            match parse_move(&line) {
                Some(position) if board.is_empty_at(position) => return Ok(position),
                _ => self.input.reject(INVALID_MOVE_MESSAGE),
            }
        }
    }
}

impl fmt::Debug for HumanPlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HumanPlayer")
            .field("mark", &self.mark)
            .finish_non_exhaustive()
    }
}

/// Either kind of player, as seated in a game
#[derive(Debug)]
pub enum Player {
    Human(HumanPlayer),
    Agent(ValueAgent),
}

impl Player {
    /// Fresh learning agent
    pub fn agent(mark: Mark, config: AgentConfig) -> Result<Self> {
        Ok(Player::Agent(ValueAgent::new(mark, config)?))
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::Human(human) => human.mark(),
            Player::Agent(agent) => agent.mark(),
        }
    }

    pub fn as_agent(&self) -> Option<&ValueAgent> {
        match self {
            Player::Agent(agent) => Some(agent),
            Player::Human(_) => None,
        }
    }

    pub fn as_agent_mut(&mut self) -> Option<&mut ValueAgent> {
        match self {
            Player::Agent(agent) => Some(agent),
            Player::Human(_) => None,
        }
    }

    pub fn into_agent(self) -> Option<ValueAgent> {
        match self {
            Player::Agent(agent) => Some(agent),
            Player::Human(_) => None,
        }
    }

    /// Ask this player for the index of its next mark.
    pub fn select_move(&mut self, board: &BoardState) -> Result<usize> {
        match self {
            Player::Human(human) => human.select_move(board),
            Player::Agent(agent) => agent.select_move(board),
        }
    }

    /// Forget the state produced by this player's last move.
    pub fn clear_previous_state(&mut self) {
        if let Player::Agent(agent) = self {
            agent.clear_previous_state();
        }
    }

    /// Deliver the end-of-game value; humans ignore it.
    pub fn receive_terminal(&mut self, value: f64) -> Option<f64> {
        match self {
            Player::Agent(agent) => agent.apply_terminal(value),
            Player::Human(_) => None,
        }
    }
}

impl From<ValueAgent> for Player {
    fn from(agent: ValueAgent) -> Self {
        Player::Agent(agent)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.mark())
    }
}

/// Kind of player to create for a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl FromStr for PlayerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "computer" | "agent" => Ok(PlayerKind::Computer),
            _ => Err(Error::InvalidPlayerKind {
                input: s.to_string(),
            }),
        }
    }
}

/// How to fill a seat when constructing a game
pub enum PlayerSpec {
    /// New human reading from the given source
    Human(Box<dyn InputSource>),
    /// New agent with an empty policy
    Agent(AgentConfig),
    /// Adopt a player, keeping its policy
    Existing(Player),
}

impl PlayerSpec {
    /// Terminal-backed human
    pub fn human() -> Self {
        PlayerSpec::Human(Box::new(StdinInput::new()))
    }

    /// Agent with default rates
    pub fn agent() -> Self {
        PlayerSpec::Agent(AgentConfig::default())
    }

    pub fn from_kind(kind: PlayerKind) -> Self {
        match kind {
            PlayerKind::Human => Self::human(),
            PlayerKind::Computer => Self::agent(),
        }
    }

    /// Produce the player for the seat holding `mark`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MarkMismatch`] when adopting a player of the other
    /// mark, or a configuration error for an invalid agent config.
    pub fn build(self, mark: Mark) -> Result<Player> {
        match self {
            PlayerSpec::Human(input) => Ok(Player::Human(HumanPlayer::new(mark, input))),
            PlayerSpec::Agent(config) => Player::agent(mark, config),
            PlayerSpec::Existing(mut player) => {
                if player.mark() != mark {
                    return Err(Error::MarkMismatch {
                        expected: mark,
                        found: player.mark(),
                    });
                }
                player.clear_previous_state();
                Ok(player)
            }
        }
    }
}

impl From<Player> for PlayerSpec {
    fn from(player: Player) -> Self {
        PlayerSpec::Existing(player)
    }
}

impl From<ValueAgent> for PlayerSpec {
    fn from(agent: ValueAgent) -> Self {
        PlayerSpec::Existing(Player::Agent(agent))
    }
}

impl FromStr for PlayerSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<PlayerKind>().map(PlayerSpec::from_kind)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::adapters::ScriptedInput;

    #[test]
    fn test_parse_move_accepts_one_indexed_pairs() {
        assert_eq!(parse_move("1,1"), Some(0));
        assert_eq!(parse_move("2,3"), Some(5));
        assert_eq!(parse_move(" 3 , 3 "), Some(8));
        assert_eq!(parse_move("(3,1)"), Some(6));
    }

    #[test]
    fn test_parse_move_rejects_malformed_or_out_of_range() {
        for input in ["", "1", "1,", "a,b", "0,1", "1,4", "-1,2", "1,2,3", "1;2"] {
            assert_eq!(parse_move(input), None, "input {input:?}");
        }
    }

    #[test]
    fn test_human_reprompts_until_valid_empty_cell() {
        let input = Rc::new(RefCell::new(ScriptedInput::new([
            "nonsense", "1,1", "4,4", "2,2",
        ])));
        let mut human = HumanPlayer::new(Mark::O, Box::new(Rc::clone(&input)));
        let board = BoardState::from_string("X________").unwrap();

        assert_eq!(human.select_move(&board).unwrap(), 4);
        let input = input.borrow();
        assert_eq!(input.prompts(), 4);
        assert_eq!(input.rejections().len(), 3);
        assert_eq!(input.rejections()[0], INVALID_MOVE_MESSAGE);
    }

    #[test]
    fn test_human_stops_when_input_closes() {
        let mut human = HumanPlayer::new(Mark::X, Box::new(ScriptedInput::new(["bad"])));
        assert!(matches!(
            human.select_move(&BoardState::new()),
            Err(Error::InputClosed)
        ));
    }

    #[test]
    fn test_player_kind_parsing() {
        assert_eq!("human".parse::<PlayerKind>().unwrap(), PlayerKind::Human);
        assert_eq!(
            "Computer".parse::<PlayerKind>().unwrap(),
            PlayerKind::Computer
        );
        assert!(matches!(
            "robot".parse::<PlayerKind>(),
            Err(Error::InvalidPlayerKind { .. })
        ));
    }

    #[test]
    fn test_existing_player_must_match_seat() {
        let agent = Player::agent(Mark::O, AgentConfig::new()).unwrap();
        let err = PlayerSpec::Existing(agent).build(Mark::X).unwrap_err();
        assert!(matches!(
            err,
            Error::MarkMismatch {
                expected: Mark::X,
                found: Mark::O
            }
        ));
    }

    #[test]
    fn test_adopting_clears_previous_state_but_keeps_policy() {
        let mut agent = ValueAgent::new(Mark::X, AgentConfig::new().with_seed(2)).unwrap();
        agent.select_move(&BoardState::new()).unwrap();
        let learned = agent.policy().len();
        assert!(agent.previous_state().is_some());

        let player = PlayerSpec::from(agent).build(Mark::X).unwrap();
        let agent = player.as_agent().unwrap();
        assert!(agent.previous_state().is_none());
        assert_eq!(agent.policy().len(), learned);
    }

    #[test]
    fn test_display_names_mark() {
        let player = Player::agent(Mark::O, AgentConfig::new()).unwrap();
        assert_eq!(player.to_string(), "Player O");
    }
}
