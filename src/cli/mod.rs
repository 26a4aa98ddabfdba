//! CLI infrastructure for the oracle
//!
//! This module provides the command-line interface for classifying,
//! evaluating and looking up positions, validating the solvers against each
//! other, and playing against the oracle.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `trace` for this
/// crate and the default is `warn`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "ttt_oracle=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A subscriber may already be installed (tests, embedding callers)
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}
