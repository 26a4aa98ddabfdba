//! Configuration values threaded explicitly into the solvers

use serde::{Deserialize, Serialize};

use crate::tictactoe::Enumeration;

/// Controls how much scoring detail the search and builder emit.
///
/// When `verbose` is set every scored position is reported as a `trace`
/// event; otherwise only summaries are logged at `debug`. The subscriber's
/// own filter still decides what is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraceConfig {
    pub verbose: bool,
}

impl TraceConfig {
    /// Quiet configuration: summaries only
    pub fn quiet() -> Self {
        Self { verbose: false }
    }

    /// Report every scored position
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

/// Configuration for building the retrograde database.
///
/// # Examples
///
/// ```
/// use ttt_oracle::{BuildConfig, TraceConfig, tictactoe::Enumeration};
///
/// let config = BuildConfig::new()
///     .with_enumeration(Enumeration::Permutation)
///     .with_trace(TraceConfig::verbose());
/// assert!(config.trace.verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Logging detail for the build
    pub trace: TraceConfig,
    /// How each ply's positions are listed
    pub enumeration: Enumeration,
}

impl BuildConfig {
    /// Recursive enumeration, quiet tracing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enumeration strategy.
    pub fn with_enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enumeration = enumeration;
        self
    }

    /// Set the trace configuration.
    pub fn with_trace(mut self, trace: TraceConfig) -> Self {
        self.trace = trace;
        self
    }
}
