//! Cross-checks between the independent parts of the solver

use std::collections::HashSet;

use serde::Serialize;

use super::{AlphaBeta, Database};
use crate::{
    Result,
    tictactoe::{CELL_COUNT, Enumeration, Position},
};

/// A position whose table score disagrees with the live search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreMismatch {
    pub position: Position,
    pub table: i32,
    pub search: i32,
}

/// Compare every database score with an alpha-beta evaluation.
///
/// `on_position` is called once per checked position.
pub fn score_mismatches(
    db: &Database,
    searcher: &AlphaBeta,
    mut on_position: impl FnMut(),
) -> Result<Vec<ScoreMismatch>> {
    let mut mismatches = Vec::new();
    for (position, entry) in db.iter() {
        let search = searcher.evaluate(position)?.score;
        if search != entry.score {
            mismatches.push(ScoreMismatch {
                position: *position,
                table: entry.score,
                search,
            });
        }
        on_position();
    }
    Ok(mismatches)
}

/// Plies on which the two enumeration strategies produce different sets
pub fn enumeration_mismatches() -> Vec<usize> {
    (0..=CELL_COUNT)
        .filter(|&marks| {
            let placed: HashSet<Position> =
                Enumeration::Recursive.positions(marks).into_iter().collect();
            let permuted: HashSet<Position> =
                Enumeration::Permutation.positions(marks).into_iter().collect();
            placed != permuted
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_agree_on_every_ply() {
        assert!(enumeration_mismatches().is_empty());
    }
}
