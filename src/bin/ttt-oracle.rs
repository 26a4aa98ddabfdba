//! ttt-oracle CLI - Perfect-play tic-tac-toe
//!
//! This CLI provides a unified interface for:
//! - Classifying positions under the game's legality rules
//! - Evaluating positions with alpha-beta search
//! - Looking up positions in the retrograde database
//! - Cross-validating search against the database
//! - Playing against the oracle

use anyhow::Result;
use clap::{Parser, Subcommand};
use ttt_oracle::cli::{commands, config::CommonConfig, init_tracing};

#[derive(Parser)]
#[command(name = "ttt-oracle")]
#[command(version, about = "Perfect-play tic-tac-toe oracle", long_about = None)]
struct Cli {
    /// Trace every scored position (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Hide progress bars and spinners
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a position
    Classify(commands::classify::ClassifyArgs),

    /// Evaluate a position with search
    Evaluate(commands::evaluate::EvaluateArgs),

    /// Look up a position in the database
    Lookup(commands::lookup::LookupArgs),

    /// Summarize the legal state space
    Stats(commands::stats::StatsArgs),

    /// Cross-validate search, database and enumeration
    Validate(commands::validate::ValidateArgs),

    /// Play against the oracle
    Play(commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let common = CommonConfig {
        progress: !cli.no_progress,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Classify(args) => commands::classify::execute(args),
        Commands::Evaluate(args) => commands::evaluate::execute(args, common),
        Commands::Lookup(args) => commands::lookup::execute(args, common),
        Commands::Stats(args) => commands::stats::execute(args, common),
        Commands::Validate(args) => commands::validate::execute(args, common),
        Commands::Play(args) => commands::play::execute(args, common),
    }
}
