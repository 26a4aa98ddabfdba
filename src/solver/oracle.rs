//! Oracle port: anything that can score a position for a driver
//!
//! Both the precomputed database and the live searches answer the same
//! question, so drivers can be written once against this trait.

use super::{AlphaBeta, Database, Minimax, ScoreEntry};
use crate::{Result, tictactoe::Position};

pub trait Oracle {
    /// Exact score and optimal moves for `position`
    fn entry(&self, position: &Position) -> Result<ScoreEntry>;

    fn name(&self) -> &str;
}

impl Oracle for Database {
    fn entry(&self, position: &Position) -> Result<ScoreEntry> {
        self.lookup(position).cloned()
    }

    fn name(&self) -> &str {
        "database"
    }
}

impl Oracle for AlphaBeta {
    fn entry(&self, position: &Position) -> Result<ScoreEntry> {
        self.evaluate(position)
    }

    fn name(&self) -> &str {
        "alpha-beta"
    }
}

impl Oracle for Minimax {
    fn entry(&self, position: &Position) -> Result<ScoreEntry> {
        self.evaluate(position)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracles_agree_on_a_midgame_position() {
        let position: Position = "X___O___X".parse().unwrap();
        let db = Database::build().unwrap();
        let oracles: [&dyn Oracle; 3] = [&db, &AlphaBeta::default(), &Minimax::default()];

        let expected = db.entry(&position).unwrap();
        for oracle in oracles {
            assert_eq!(oracle.entry(&position).unwrap(), expected, "{}", oracle.name());
        }
    }
}
