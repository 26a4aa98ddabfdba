//! High-level game management for interactive drivers

use serde::{Deserialize, Serialize};

use super::{CELL_COUNT, Mark, Position, TerminalState};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub cell: usize,
    pub mark: Mark,
}

/// A game in progress with its history.
///
/// Human-supplied cells are validated here, before any candidate position is
/// built; the solver core assumes it only ever sees legal positions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Position,
    pub moves: Vec<Move>,
    current: Position,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        let initial = Position::new();
        Game {
            initial,
            moves: Vec::new(),
            current: initial,
        }
    }

    /// Resume play from an arbitrary position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalPosition`] if the position could not
    /// arise in a legal game.
    pub fn from_position(initial: Position) -> Result<Self, crate::Error> {
        if initial.classify() == TerminalState::Illegal || initial.to_play().is_err() {
            return Err(crate::Error::IllegalPosition {
                position: initial.key(),
            });
        }
        Ok(Game {
            initial,
            moves: Vec::new(),
            current: initial,
        })
    }

    /// Current position
    pub fn current(&self) -> Position {
        self.current
    }

    /// Current status of the game
    pub fn outcome(&self) -> TerminalState {
        self.current.classify()
    }

    /// Whether moves may still be played
    pub fn is_over(&self) -> bool {
        self.outcome() != TerminalState::InProgress
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns an error if the game is over, the cell is outside 0-8, or the
    /// cell is already occupied.
    pub fn play(&mut self, cell: usize) -> Result<TerminalState, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }
        if cell >= CELL_COUNT {
            return Err(crate::Error::CellOutOfRange { cell });
        }

        let mark = self.current.to_play()?;
        let next = self.current.make_move(cell)?;

        self.moves.push(Move { cell, mark });
        self.current = next;
        Ok(self.outcome())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_to_a_win() {
        let mut game = Game::new();
        for cell in [0, 3, 1, 4] {
            assert_eq!(game.play(cell).unwrap(), TerminalState::InProgress);
        }
        assert_eq!(game.play(2).unwrap(), TerminalState::Won(Mark::X));
        assert!(game.is_over());
        assert_eq!(game.moves.len(), 5);
        assert_eq!(game.moves[1], Move { cell: 3, mark: Mark::O });
        assert!(matches!(game.play(8), Err(crate::Error::GameOver)));
    }

    #[test]
    fn rejects_bad_cells_without_changing_state() {
        let mut game = Game::new();
        game.play(4).unwrap();

        assert!(matches!(
            game.play(4),
            Err(crate::Error::InvalidMove { cell: 4 })
        ));
        assert!(matches!(
            game.play(12),
            Err(crate::Error::CellOutOfRange { cell: 12 })
        ));
        assert_eq!(game.moves.len(), 1);
        assert_eq!(game.current().key(), "____X____");
    }

    #[test]
    fn resumes_from_a_legal_position() {
        let game = Game::from_position("XOO_X____".parse().unwrap()).unwrap();
        assert_eq!(game.current().to_play().unwrap(), Mark::X);
        assert!(!game.is_over());

        assert!(Game::from_position("XXXOOO___".parse().unwrap()).is_err());
        assert!(Game::from_position("OO_______".parse().unwrap()).is_err());
    }
}
