//! Stats command - Summarize the legal state space

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::{CommonConfig, EnumerationArg},
        output::{build_with_spinner, format_number, print_kv, print_section},
    },
    solver::OutcomeCounts,
};

#[derive(Parser, Debug)]
#[command(about = "Show per-ply and per-outcome counts of the database")]
pub struct StatsArgs {
    /// How the builder lists each ply's positions
    #[arg(long, value_enum, default_value = "recursive")]
    pub enumeration: EnumerationArg,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct StatsReport {
    total: usize,
    per_ply: Vec<usize>,
    outcomes: OutcomeCounts,
    root_score: i32,
}

pub fn execute(args: StatsArgs, common: CommonConfig) -> Result<()> {
    let db = build_with_spinner(
        &common.build_config(args.enumeration),
        common.progress && !args.json,
    )?;
    let report = StatsReport {
        total: db.len(),
        per_ply: db.ply_counts().to_vec(),
        outcomes: db.outcome_counts(),
        root_score: db.lookup(&crate::Position::new())?.score,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_section("Legal positions");
    for (ply, count) in report.per_ply.iter().enumerate() {
        print_kv(&format!("Ply {ply}"), &format_number(*count));
    }
    print_kv("Total", &format_number(report.total));

    print_section("Outcomes");
    print_kv("In progress", &format_number(report.outcomes.in_progress));
    print_kv("X wins", &format_number(report.outcomes.x_wins));
    print_kv("O wins", &format_number(report.outcomes.o_wins));
    print_kv("Draws", &format_number(report.outcomes.draws));
    print_kv("Root score", &report.root_score.to_string());
    Ok(())
}
