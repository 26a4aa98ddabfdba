//! Lookup command - Read a position's entry from the retrograde database

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::{CommonConfig, EnumerationArg},
        output::{build_with_spinner, print_entry},
    },
    solver::ScoreEntry,
    tictactoe::Position,
};

#[derive(Parser, Debug)]
#[command(about = "Look up a position in the retrograde database")]
pub struct LookupArgs {
    /// Position key: 9 characters of X, O and _ in row-major order
    pub position: String,

    /// How the builder lists each ply's positions
    #[arg(long, value_enum, default_value = "recursive")]
    pub enumeration: EnumerationArg,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct LookupReport<'a> {
    position: Position,
    #[serde(flatten)]
    entry: &'a ScoreEntry,
}

pub fn execute(args: LookupArgs, common: CommonConfig) -> Result<()> {
    let position: Position = args.position.parse()?;
    let db = build_with_spinner(
        &common.build_config(args.enumeration),
        common.progress && !args.json,
    )?;
    let entry = db.lookup(&position)?;

    if args.json {
        let report = LookupReport { position, entry };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_entry(&position, entry);
    }
    Ok(())
}
