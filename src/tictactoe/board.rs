//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '_' | '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player's symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// The nine cells of a board, row-major.
///
/// `BoardState` is `Copy`, so every value handed out is already an immutable
/// snapshot; that is what the policy table keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
        }
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        BoardState { cells }
    }

    /// Create a board from a string of 9 cell characters.
    ///
    /// Whitespace is ignored, so `"XX_ OO_ ___"` is accepted.
    ///
    /// # Errors
    ///
    /// Returns error unless there are exactly 9 non-whitespace characters,
    /// each a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(BoardState { cells })
    }

    /// Indices of all empty cells, ascending
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    pub fn is_empty_at(&self, position: usize) -> bool {
        self.cells.get(position) == Some(&Cell::Empty)
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        let target = mark.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// Place `mark` at `position` in place.
    ///
    /// # Errors
    ///
    /// Returns error if the position is out of bounds or already occupied.
    pub fn place(&mut self, position: usize, mark: Mark) -> Result<(), crate::Error> {
        match self.cells.get(position) {
            None => Err(crate::Error::InvalidPosition { position }),
            Some(Cell::Empty) => {
                self.cells[position] = mark.to_cell();
                Ok(())
            }
            Some(_) => Err(crate::Error::InvalidMove { position }),
        }
    }

    /// Successor snapshot with `mark` written at `position`.
    ///
    /// Callers pass positions taken from [`BoardState::empty_positions`].
    pub fn with_mark(&self, position: usize, mark: Mark) -> BoardState {
        let mut next = *self;
        next.cells[position] = mark.to_cell();
        next
    }

    /// Compact single-line encoding, e.g. `XX_OO____`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            let line: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new();
        assert_eq!(board.empty_positions(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_bounds() {
        let mut board = BoardState::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(board.cells[4], Cell::X);
        assert!(matches!(
            board.place(4, Mark::O),
            Err(crate::Error::InvalidMove { position: 4 })
        ));
        assert!(matches!(
            board.place(9, Mark::O),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = BoardState::new();
        let next = board.with_mark(0, Mark::O);
        assert_eq!(board.cells[0], Cell::Empty);
        assert_eq!(next.cells[0], Cell::O);
    }

    #[test]
    fn test_display_renders_three_rows() {
        let board = BoardState::from_string("XX_OO____").unwrap();
        assert_eq!(board.to_string(), "X X _\nO O _\n_ _ _\n");
    }

    #[test]
    fn test_from_string_errors() {
        assert!(matches!(
            BoardState::from_string("XX_"),
            Err(crate::Error::InvalidBoardLength { got: 3, .. })
        ));
        assert!(matches!(
            BoardState::from_string("XX_OO___Z"),
            Err(crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 8,
                ..
            })
        ));
    }

    #[test]
    fn test_from_string_rejects_extra_cells() {
        assert!(matches!(
            BoardState::from_string("XX_OO____X"),
            Err(crate::Error::InvalidBoardLength { got: 10, .. })
        ));
        assert!(BoardState::from_string("XX_ OO_ ___").is_ok());
    }

    #[test]
    fn test_mark_display_and_opponent() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
