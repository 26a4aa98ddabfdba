//! Shared configuration types for CLI commands

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    BuildConfig, TraceConfig,
    solver::TieBreak,
    tictactoe::{Enumeration, Mark},
};

/// Common configuration shared across commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Whether to show progress bars
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl CommonConfig {
    pub fn trace(&self) -> TraceConfig {
        TraceConfig {
            verbose: self.verbose,
        }
    }

    pub fn build_config(&self, enumeration: EnumerationArg) -> BuildConfig {
        BuildConfig::new()
            .with_trace(self.trace())
            .with_enumeration(enumeration.into())
    }
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            progress: true,
            verbose: false,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum EnumerationArg {
    /// Recursive placement with a seen-set
    #[default]
    Recursive,
    /// Permutations of a fixed multiset of marks
    Permutation,
}

impl From<EnumerationArg> for Enumeration {
    fn from(arg: EnumerationArg) -> Self {
        match arg {
            EnumerationArg::Recursive => Enumeration::Recursive,
            EnumerationArg::Permutation => Enumeration::Permutation,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OracleArg {
    /// Precomputed retrograde database
    Database,
    /// Alpha-beta search on every move
    Search,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum TieBreakArg {
    #[default]
    Uniform,
    First,
    PreferImmediateWin,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Uniform => TieBreak::Uniform,
            TieBreakArg::First => TieBreak::First,
            TieBreakArg::PreferImmediateWin => TieBreak::PreferImmediateWin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_config_carries_verbosity_and_strategy() {
        let common = CommonConfig {
            progress: false,
            verbose: true,
        };
        let config = common.build_config(EnumerationArg::Permutation);
        assert!(config.trace.verbose);
        assert_eq!(config.enumeration, Enumeration::Permutation);
    }
}
