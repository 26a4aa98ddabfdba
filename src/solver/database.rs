//! Retrograde database: every legal position scored by backward induction

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info, trace};

use super::{BestMoves, ScoreEntry};
use crate::{
    Error, Result,
    config::{BuildConfig, TraceConfig},
    tictactoe::{CELL_COUNT, Mark, Position, TerminalState},
};

/// Immutable table from position to its exact score and optimal moves.
///
/// Built once, bottom-up from full boards to the empty board. Every entry is
/// computed from the already-final entries of its children, so construction
/// never searches forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Database {
    entries: HashMap<Position, ScoreEntry>,
}

/// Terminal-state breakdown of the database
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub in_progress: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl Database {
    /// Build with recursive enumeration and quiet tracing
    pub fn build() -> Result<Self> {
        Self::build_with(&BuildConfig::default())
    }

    /// Build the full table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingChildEntry`] if a child of some position was not
    /// scored in the previous ply. That can only come from an enumeration bug,
    /// so the build is abandoned rather than leaving a hole in the table.
    pub fn build_with(config: &BuildConfig) -> Result<Self> {
        let mut db = Database {
            entries: HashMap::new(),
        };

        for marks in (0..=CELL_COUNT).rev() {
            let positions = config.enumeration.positions(marks);
            debug!(ply = marks, positions = positions.len(), "scoring ply");

            // Positions on one ply only read the finished ply above them
            let scored = positions
                .into_iter()
                .map(|position| Ok((position, db.score_position(&position, config.trace)?)))
                .collect::<Result<Vec<_>>>()?;
            db.entries.extend(scored);
        }

        info!(positions = db.len(), enumeration = ?config.enumeration, "database built");
        Ok(db)
    }

    fn score_position(&self, position: &Position, trace: TraceConfig) -> Result<ScoreEntry> {
        let state = position.classify();
        if let Some(score) = state.score() {
            return Ok(ScoreEntry::terminal(score));
        }
        if state == TerminalState::Illegal {
            return Err(Error::IllegalPosition {
                position: position.key(),
            });
        }

        let mut best = BestMoves::new(position.to_play()?);
        for (cell, child) in position.children()? {
            let entry = self
                .entries
                .get(&child)
                .ok_or_else(|| Error::MissingChildEntry {
                    parent: position.key(),
                    child: child.key(),
                })?;
            if trace.verbose {
                trace!(parent = %position, cell, child = %child, score = entry.score, "move");
            }
            best.offer(cell, entry.score);
        }

        let entry = best.finish().ok_or_else(|| Error::NoValidMoves {
            position: position.key(),
        })?;
        if trace.verbose {
            trace!(%position, score = entry.score, moves = ?entry.optimal_moves, "scored");
        }
        Ok(entry)
    }

    /// Entry for `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionNotFound`] for positions outside the legal
    /// state space.
    pub fn lookup(&self, position: &Position) -> Result<&ScoreEntry> {
        self.entries
            .get(position)
            .ok_or_else(|| Error::PositionNotFound {
                position: position.key(),
            })
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.entries.contains_key(position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, ordered by canonical key
    pub fn iter(&self) -> impl Iterator<Item = (&Position, &ScoreEntry)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by_key(|(position, _)| position.key());
        entries.into_iter()
    }

    /// Number of positions per ply (index = occupied cells)
    pub fn ply_counts(&self) -> [usize; CELL_COUNT + 1] {
        let mut counts = [0; CELL_COUNT + 1];
        for position in self.entries.keys() {
            counts[position.occupied_count()] += 1;
        }
        counts
    }

    pub fn outcome_counts(&self) -> OutcomeCounts {
        let mut counts = OutcomeCounts::default();
        for position in self.entries.keys() {
            match position.classify() {
                TerminalState::InProgress => counts.in_progress += 1,
                TerminalState::Won(Mark::X) => counts.x_wins += 1,
                TerminalState::Won(Mark::O) => counts.o_wins += 1,
                TerminalState::Draw => counts.draws += 1,
                TerminalState::Illegal => {}
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn missing_child_aborts_scoring() {
        let empty = Database {
            entries: HashMap::new(),
        };
        let err = empty
            .score_position(&Position::new(), TraceConfig::quiet())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingChildEntry { ref parent, ref child }
                if parent == "_________" && child == "X________"
        ));
    }

    #[test]
    fn terminal_positions_need_no_children() {
        let empty = Database {
            entries: HashMap::new(),
        };
        let entry = empty
            .score_position(&"XOXOXOOXO".parse().unwrap(), TraceConfig::quiet())
            .unwrap();
        assert_eq!(entry, ScoreEntry::terminal(0));
    }

    #[test]
    fn lookup_outside_state_space_fails() {
        let db = Database::build().unwrap();
        let unreachable: Position = "XXXOOO___".parse().unwrap();
        assert!(matches!(
            db.lookup(&unreachable),
            Err(Error::PositionNotFound { .. })
        ));
        // Draw with O ahead by one: classified as a draw but never reached
        let lopsided: Position = "XOXOXOOXO".parse().unwrap();
        assert!(!db.contains(&lopsided));
    }

    #[test]
    fn root_entry() {
        let db = Database::build().unwrap();
        let root = db.lookup(&Position::new()).unwrap();
        assert_eq!(root.score, 0);
        assert_eq!(root.optimal_moves, (0..9).collect::<BTreeSet<_>>());
    }

    #[test]
    fn iteration_is_sorted_and_complete() {
        let db = Database::build().unwrap();
        let keys: Vec<String> = db.iter().map(|(p, _)| p.key()).collect();
        assert_eq!(keys.len(), db.len());
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }
}
