//! Subcommand implementations

pub mod classify;
pub mod evaluate;
pub mod lookup;
pub mod play;
pub mod stats;
pub mod validate;
