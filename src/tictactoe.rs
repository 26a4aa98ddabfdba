//! Tic-Tac-Toe position model, rules and move generation

pub mod board;
pub mod enumeration;
pub mod game;
pub mod lines;
pub mod moves;
pub mod terminal;

pub use board::{CELL_COUNT, Cell, Mark, Position};
pub use enumeration::{Enumeration, permuted_positions, placed_positions};
pub use game::{Game, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use moves::Children;
pub use terminal::{TerminalState, classify};
