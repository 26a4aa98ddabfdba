//! Exact solvers: alpha-beta search, plain minimax and the retrograde database

pub mod alphabeta;
pub mod database;
pub mod entry;
pub mod minimax;
pub mod oracle;
pub mod picker;
pub mod validation;

pub use alphabeta::{AlphaBeta, evaluate};
pub use database::{Database, OutcomeCounts};
pub use entry::{BestMoves, ScoreEntry, is_better};
pub use minimax::Minimax;
pub use oracle::Oracle;
pub use picker::{MovePicker, PickerConfig, TieBreak};
pub use validation::{ScoreMismatch, enumeration_mismatches, score_mismatches};

/// Work done by one search call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, including the root
    pub nodes: u64,
}
