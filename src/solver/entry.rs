//! Score entries and the shared better-than rule

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::tictactoe::Mark;

/// Exact game-theoretic value of a position with every move achieving it.
///
/// Scores are from X's point of view: `1` X wins, `-1` O wins, `0` draw.
/// Terminal positions carry an empty move set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: i32,
    pub optimal_moves: BTreeSet<usize>,
}

impl ScoreEntry {
    /// Entry for a finished game
    pub fn terminal(score: i32) -> Self {
        Self {
            score,
            optimal_moves: BTreeSet::new(),
        }
    }

    /// True when there is nothing left to play
    pub fn is_terminal(&self) -> bool {
        self.optimal_moves.is_empty()
    }
}

/// Whether `candidate` is strictly better than `incumbent` for `mover`
pub fn is_better(mover: Mark, candidate: i32, incumbent: i32) -> bool {
    match mover {
        Mark::X => candidate > incumbent,
        Mark::O => candidate < incumbent,
    }
}

/// Running best score and the set of moves that reach it.
///
/// A strictly better score replaces the set; an equal score joins it.
#[derive(Debug, Clone)]
pub struct BestMoves {
    mover: Mark,
    best: Option<ScoreEntry>,
}

impl BestMoves {
    pub fn new(mover: Mark) -> Self {
        Self { mover, best: None }
    }

    pub fn offer(&mut self, cell: usize, score: i32) {
        match &mut self.best {
            Some(best) if is_better(self.mover, score, best.score) => {
                best.score = score;
                best.optimal_moves = BTreeSet::from([cell]);
            }
            Some(best) if best.score == score => {
                best.optimal_moves.insert(cell);
            }
            Some(_) => {}
            None => {
                self.best = Some(ScoreEntry {
                    score,
                    optimal_moves: BTreeSet::from([cell]),
                });
            }
        }
    }

    /// The final entry, or `None` if no move was offered
    pub fn finish(self) -> Option<ScoreEntry> {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_keeps_maximum_and_ties() {
        let mut best = BestMoves::new(Mark::X);
        best.offer(0, 0);
        best.offer(2, -1);
        best.offer(4, 1);
        best.offer(6, 1);
        best.offer(8, 0);

        let entry = best.finish().unwrap();
        assert_eq!(entry.score, 1);
        assert_eq!(entry.optimal_moves, BTreeSet::from([4, 6]));
    }

    #[test]
    fn o_keeps_minimum_and_ties() {
        let mut best = BestMoves::new(Mark::O);
        best.offer(1, 1);
        best.offer(3, 0);
        best.offer(5, 0);

        let entry = best.finish().unwrap();
        assert_eq!(entry.score, 0);
        assert_eq!(entry.optimal_moves, BTreeSet::from([3, 5]));
    }

    #[test]
    fn no_moves_means_no_entry() {
        assert!(BestMoves::new(Mark::X).finish().is_none());
    }

    #[test]
    fn terminal_entries_have_no_moves() {
        let entry = ScoreEntry::terminal(-1);
        assert!(entry.is_terminal());
        assert_eq!(entry.score, -1);
    }
}
