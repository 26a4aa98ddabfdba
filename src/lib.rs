//! Perfect-play Tic-Tac-Toe oracle
//!
//! This crate provides:
//! - Position model, legality rules and one-ply move generation
//! - Alpha-beta search returning exact scores and every optimal move
//! - A retrograde database of all 5,478 legal positions built by backward induction
//! - Move selection with injectable randomness for interactive drivers
//! - A command-line front end (`ttt-oracle`)

pub mod cli;
pub mod config;
pub mod error;
pub mod solver;
pub mod tictactoe;

pub use config::{BuildConfig, TraceConfig};
pub use error::{Error, Result};
pub use solver::{AlphaBeta, Database, Oracle, ScoreEntry, evaluate};
pub use tictactoe::{Mark, Position, TerminalState, classify};
