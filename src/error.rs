//! Error types for the oracle crate

use thiserror::Error;

/// Main error type for the oracle crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position '{position}' is not reachable by legal play")]
    IllegalPosition { position: String },

    #[error("child '{child}' of '{parent}' has no database entry")]
    MissingChildEntry { parent: String, child: String },

    #[error("position '{position}' is not in the database")]
    PositionNotFound { position: String },

    #[error("board string must have {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid move: cell {cell} is already occupied")]
    InvalidMove { cell: usize },

    #[error("cell {cell} is out of bounds (must be 0-8)")]
    CellOutOfRange { cell: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available for '{position}'")]
    NoValidMoves { position: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

