//! Plain minimax without pruning, kept as a reference for the pruned search

use tracing::trace;

use super::{BestMoves, ScoreEntry, SearchStats};
use crate::{
    Error, Result,
    config::TraceConfig,
    tictactoe::{Position, TerminalState},
};

/// Exhaustive minimax searcher
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax {
    trace: TraceConfig,
}

impl Minimax {
    pub fn new(trace: TraceConfig) -> Self {
        Self { trace }
    }

    pub fn evaluate(&self, position: &Position) -> Result<ScoreEntry> {
        self.analyze(position).map(|(entry, _)| entry)
    }

    pub fn analyze(&self, position: &Position) -> Result<(ScoreEntry, SearchStats)> {
        let mut stats = SearchStats::default();
        let entry = self.score(position, &mut stats)?;
        Ok((entry, stats))
    }

    fn score(&self, position: &Position, stats: &mut SearchStats) -> Result<ScoreEntry> {
        stats.nodes += 1;
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
            best.offer(cell, self.score(&child, stats)?.score);
        }
        let entry = best.finish().ok_or_else(|| Error::NoValidMoves {
            position: position.key(),
        })?;

        if self.trace.verbose {
            trace!(%position, score = entry.score, moves = ?entry.optimal_moves, "minimax");
        }
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::AlphaBeta;

    #[test]
    fn pruning_preserves_value_and_move_set() {
        let plain = Minimax::default();
        let pruned = AlphaBeta::default();
        for key in ["X________", "____X____", "XO__X____", "X___O___X"] {
            let position: Position = key.parse().unwrap();
            assert_eq!(
                plain.evaluate(&position).unwrap(),
                pruned.evaluate(&position).unwrap(),
                "mismatch at {key}"
            );
        }
    }

    #[test]
    fn pruning_visits_fewer_nodes() {
        let position: Position = "X________".parse().unwrap();
        let (_, plain) = Minimax::default().analyze(&position).unwrap();
        let (_, pruned) = AlphaBeta::default().analyze(&position).unwrap();
        assert!(pruned.nodes < plain.nodes, "{pruned:?} vs {plain:?}");
    }
}
