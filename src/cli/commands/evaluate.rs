//! Evaluate command - Score a position with a live search

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::CommonConfig,
        output::{print_entry, print_kv},
    },
    solver::{AlphaBeta, Minimax, ScoreEntry},
    tictactoe::Position,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a position with alpha-beta search")]
pub struct EvaluateArgs {
    /// Position key: 9 characters of X, O and _ in row-major order
    pub position: String,

    /// Search without pruning (plain minimax)
    #[arg(long)]
    pub no_pruning: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct EvaluationReport {
    position: Position,
    search: &'static str,
    nodes: u64,
    #[serde(flatten)]
    entry: ScoreEntry,
}

pub fn execute(args: EvaluateArgs, common: CommonConfig) -> Result<()> {
    let position: Position = args.position.parse()?;

    let (search, (entry, stats)) = if args.no_pruning {
        ("minimax", Minimax::new(common.trace()).analyze(&position)?)
    } else {
        ("alpha-beta", AlphaBeta::new(common.trace()).analyze(&position)?)
    };

    if args.json {
        let report = EvaluationReport {
            position,
            search,
            nodes: stats.nodes,
            entry,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_entry(&position, &entry);
    print_kv("Search", search);
    print_kv("Nodes visited", &stats.nodes.to_string());
    Ok(())
}
