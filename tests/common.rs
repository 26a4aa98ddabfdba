//! Shared fixtures for the ttt-oracle test suite.

#![allow(dead_code)]

use std::sync::OnceLock;

use ttt_oracle::{Database, Position};

/// Database built once per test binary
pub fn database() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| Database::build().expect("database builds"))
}

/// Parse a position key, panicking on malformed fixtures
pub fn pos(key: &str) -> Position {
    key.parse().expect("valid position key")
}
