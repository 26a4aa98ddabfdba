//! On-demand minimax search with alpha-beta pruning

use tracing::trace;

use super::{BestMoves, ScoreEntry, SearchStats};
use crate::{
    Error, Result,
    config::TraceConfig,
    tictactoe::{Mark, Position, TerminalState},
};

/// Alpha-beta searcher.
///
/// Holds only its trace configuration; the `(alpha, beta)` window lives on the
/// call stack of each search, so one searcher can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta {
    trace: TraceConfig,
}

impl AlphaBeta {
    pub fn new(trace: TraceConfig) -> Self {
        Self { trace }
    }

    /// Exact score and full optimal move set of `position`
    pub fn evaluate(&self, position: &Position) -> Result<ScoreEntry> {
        self.analyze(position).map(|(entry, _)| entry)
    }

    /// Like [`AlphaBeta::evaluate`], also reporting how many nodes were visited.
    ///
    /// Each root move is searched with a full window so its score is exact;
    /// that keeps the reported set of tied moves complete. Pruning happens
    /// below the root only.
    pub fn analyze(&self, position: &Position) -> Result<(ScoreEntry, SearchStats)> {
        let mut stats = SearchStats { nodes: 1 };
        let state = position.classify();
        if let Some(score) = state.score() {
            return Ok((ScoreEntry::terminal(score), stats));
        }
        if state == TerminalState::Illegal {
            return Err(illegal(position));
        }

        let mut best = BestMoves::new(position.to_play()?);
        for (cell, child) in position.children()? {
            let score = self.search(&child, i32::MIN, i32::MAX, &mut stats)?;
            if self.trace.verbose {
                trace!(parent = %position, cell, child = %child, score, "root move");
            }
            best.offer(cell, score);
        }

        let entry = best.finish().ok_or_else(|| Error::NoValidMoves {
            position: position.key(),
        })?;
        Ok((entry, stats))
    }

    /// Exact score of `position` without collecting moves
    pub fn value(&self, position: &Position) -> Result<i32> {
        let mut stats = SearchStats::default();
        self.search(position, i32::MIN, i32::MAX, &mut stats)
    }

    fn search(
        &self,
        position: &Position,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> Result<i32> {
        stats.nodes += 1;
        let state = position.classify();
        if let Some(score) = state.score() {
            return Ok(score);
        }
        if state == TerminalState::Illegal {
            return Err(illegal(position));
        }

        let to_play = position.to_play()?;
        if self.trace.verbose {
            trace!(%position, %to_play, alpha, beta, "searching");
        }

        match to_play {
            Mark::X => {
                for (_, child) in position.children()? {
                    alpha = alpha.max(self.search(&child, alpha, beta, stats)?);
                    if beta <= alpha {
                        break;
                    }
                }
                Ok(alpha)
            }
            Mark::O => {
                for (_, child) in position.children()? {
                    beta = beta.min(self.search(&child, alpha, beta, stats)?);
                    if beta <= alpha {
                        break;
                    }
                }
                Ok(beta)
            }
        }
    }
}

fn illegal(position: &Position) -> Error {
    Error::IllegalPosition {
        position: position.key(),
    }
}

/// Evaluate `position` with a quiet [`AlphaBeta`] searcher
pub fn evaluate(position: &Position) -> Result<ScoreEntry> {
    AlphaBeta::default().evaluate(position)
}
