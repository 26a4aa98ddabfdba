//! Choosing one move among the tied optimal moves

use rand::{SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::{Oracle, ScoreEntry};
use crate::{
    Error, Result,
    tictactoe::{LineAnalyzer, Position},
};

/// Policy for breaking ties between equally scored moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// Uniformly random among all optimal moves
    #[default]
    Uniform,
    /// Lowest cell index
    First,
    /// Random among optimal moves that win on the spot, if any
    PreferImmediateWin,
}

/// Configuration for a [`MovePicker`].
///
/// # Examples
///
/// ```
/// use ttt_oracle::solver::{PickerConfig, TieBreak};
///
/// let config = PickerConfig::new()
///     .with_seed(7)
///     .with_tie_break(TieBreak::PreferImmediateWin);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    pub tie_break: TieBreak,
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}

/// Selects a concrete move from an oracle's optimal set.
///
/// The random source is owned by the picker and seeded from its config, so a
/// seeded picker replays the same choices.
#[derive(Debug, Clone)]
pub struct MovePicker {
    rng: StdRng,
    tie_break: TieBreak,
}

impl MovePicker {
    pub fn new(config: PickerConfig) -> Self {
        let seed = config.seed.unwrap_or_else(random);
        Self {
            rng: StdRng::seed_from_u64(seed),
            tie_break: config.tie_break,
        }
    }

    /// Pick one of `entry`'s optimal moves for `position`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] when the entry is terminal.
    pub fn pick(&mut self, position: &Position, entry: &ScoreEntry) -> Result<usize> {
        let optimal: Vec<usize> = entry.optimal_moves.iter().copied().collect();
        let no_moves = || Error::NoValidMoves {
            position: position.key(),
        };

        let chosen = match self.tie_break {
            TieBreak::First => optimal.first().copied(),
            TieBreak::Uniform => optimal.choose(&mut self.rng).copied(),
            TieBreak::PreferImmediateWin => {
                let wins = LineAnalyzer::winning_moves(position, position.to_play()?);
                let winning: Vec<usize> = optimal
                    .iter()
                    .copied()
                    .filter(|cell| wins.contains(cell))
                    .collect();
                let pool = if winning.is_empty() { &optimal } else { &winning };
                pool.choose(&mut self.rng).copied()
            }
        };

        chosen.ok_or_else(no_moves)
    }

    /// Ask `oracle` for the position's entry and pick from it
    pub fn choose<O: Oracle + ?Sized>(&mut self, oracle: &O, position: &Position) -> Result<usize> {
        let entry = oracle.entry(position)?;
        self.pick(position, &entry)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn entry(moves: &[usize]) -> ScoreEntry {
        ScoreEntry {
            score: 0,
            optimal_moves: moves.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let position = Position::new();
        let tied = entry(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let config = PickerConfig::new().with_seed(12345);

        let mut first = MovePicker::new(config);
        let mut second = MovePicker::new(config);
        let a: Vec<usize> = (0..20).map(|_| first.pick(&position, &tied).unwrap()).collect();
        let b: Vec<usize> = (0..20).map(|_| second.pick(&position, &tied).unwrap()).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|cell| tied.optimal_moves.contains(cell)));
    }

    #[test]
    fn first_policy_takes_lowest_cell() {
        let mut picker = MovePicker::new(PickerConfig::new().with_tie_break(TieBreak::First));
        assert_eq!(picker.pick(&Position::new(), &entry(&[6, 2, 8])).unwrap(), 2);
    }

    #[test]
    fn prefer_immediate_win_finishes_the_game() {
        let position: Position = "XOO_X____".parse().unwrap();
        let config = PickerConfig::new()
            .with_seed(3)
            .with_tie_break(TieBreak::PreferImmediateWin);
        let mut picker = MovePicker::new(config);
        let tied = entry(&[3, 5, 6, 8]);
        for _ in 0..10 {
            assert_eq!(picker.pick(&position, &tied).unwrap(), 8);
        }
    }

    #[test]
    fn terminal_entry_has_nothing_to_pick() {
        let mut picker = MovePicker::new(PickerConfig::new().with_seed(1));
        let err = picker
            .pick(&Position::new(), &ScoreEntry::terminal(0))
            .unwrap_err();
        assert!(matches!(err, Error::NoValidMoves { .. }));
    }
}
