//! Position representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::terminal::{TerminalState, classify};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
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
            '_' => Some(Cell::Empty),
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn to_mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }
}

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
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

/// An immutable board of nine cells in row-major order.
///
/// The side to move is not stored: it is derived from the mark counts, so a
/// position and its canonical key carry exactly the same information. The key
/// is the 9-character string over `X`, `O` and `_` produced by [`Position::key`]
/// and accepted by [`str::parse`]; serde uses the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    pub cells: [Cell; CELL_COUNT],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

impl Position {
    /// Create the empty board
    pub fn new() -> Self {
        Self::from_cells([Cell::Empty; CELL_COUNT])
    }

    /// Wrap raw cells without any legality check
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Position { cells }
    }

    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// `count(X) - count(O)`; legal play keeps this in `{0, 1}`
    pub fn differential(&self) -> isize {
        let count = self.count_pieces();
        count.x as isize - count.o as isize
    }

    /// The mark that moves next.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] when the differential is
    /// outside `{0, 1}`; such a board has no defined side to move.
    pub fn to_play(&self) -> Result<Mark, crate::Error> {
        let count = self.count_pieces();
        if count.x == count.o {
            Ok(Mark::X)
        } else if count.x == count.o + 1 {
            Ok(Mark::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// The mark that made the last move
    pub fn just_played(&self) -> Result<Mark, crate::Error> {
        self.to_play().map(Mark::opponent)
    }

    /// Number of occupied cells (the position's ply)
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Cell at index (0-8), or `None` past the board
    pub fn get(&self, cell: usize) -> Option<Cell> {
        self.cells.get(cell).copied()
    }

    /// True if `cell` is on the board and empty
    pub fn is_empty(&self, cell: usize) -> bool {
        self.get(cell) == Some(Cell::Empty)
    }

    /// Get all empty cell indices, ascending
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check whether no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Return a copy with `mark` placed at `cell`, without any rule checks.
    #[must_use = "with_mark returns a new position; the original is unchanged"]
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Position {
        let mut next = *self;
        next.cells[cell] = mark.to_cell();
        next
    }

    /// Place the side-to-move's mark at `cell`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is out of range or occupied, or if the
    /// position has no defined side to move.
    #[must_use = "make_move returns a new position; the original is unchanged"]
    pub fn make_move(&self, cell: usize) -> Result<Position, crate::Error> {
        if cell >= CELL_COUNT {
            return Err(crate::Error::CellOutOfRange { cell });
        }
        if !self.is_empty(cell) {
            return Err(crate::Error::InvalidMove { cell });
        }
        Ok(self.with_mark(cell, self.to_play()?))
    }

    /// Classify the position; see [`classify`]
    pub fn classify(&self) -> TerminalState {
        classify(self)
    }

    /// Canonical 9-character key, e.g. `"X__OX____"`
    pub fn key(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Render as a 3x3 grid, numbering empty cells so a human can pick one
    pub fn render(&self) -> String {
        let symbols: Vec<String> = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell {
                Cell::Empty => i.to_string(),
                other => other.to_char().to_string(),
            })
            .collect();
        symbols
            .chunks(3)
            .map(|row| format!(" {} | {} | {}", row[0], row[1], row[2]))
            .collect::<Vec<_>>()
            .join("\n---+---+---\n")
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Position {
    type Err = crate::Error;

    /// Parse a canonical key. Only the exact 9-character form is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELL_COUNT {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELL_COUNT,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Position { cells })
    }
}

impl TryFrom<String> for Position {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.key()
    }
}
