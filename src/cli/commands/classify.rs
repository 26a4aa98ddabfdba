//! Classify command - Report the rule-level status of a position

use anyhow::Result;
use clap::Parser;

use crate::{cli::output::print_kv, tictactoe::Position};

#[derive(Parser, Debug)]
#[command(about = "Classify a position as in progress, drawn, won or illegal")]
pub struct ClassifyArgs {
    /// Position key: 9 characters of X, O and _ in row-major order
    pub position: String,
}

pub fn execute(args: ClassifyArgs) -> Result<()> {
    let position: Position = args.position.parse()?;

    println!("{}\n", position.render());
    print_kv("Position", &position.key());
    print_kv("State", &position.classify().to_string());
    print_kv("Ply", &position.occupied_count().to_string());
    match position.to_play() {
        Ok(mark) => print_kv("To play", &mark.to_string()),
        Err(err) => print_kv("To play", &format!("undefined ({err})")),
    }

    Ok(())
}
