//! Play command - Interactive game against the oracle on stdin/stdout

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::{CommonConfig, EnumerationArg, MarkArg, OracleArg, TieBreakArg},
        output::build_with_spinner,
    },
    solver::{AlphaBeta, MovePicker, Oracle, PickerConfig},
    tictactoe::{Game, Mark, Position, TerminalState},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the oracle")]
pub struct PlayArgs {
    /// Which mark the human plays
    #[arg(long, value_enum, default_value = "x")]
    pub human: MarkArg,

    /// Where the computer gets its moves from
    #[arg(long, value_enum, default_value = "database")]
    pub oracle: OracleArg,

    /// How the computer breaks ties between optimal moves
    #[arg(long, value_enum, default_value = "uniform")]
    pub tie_break: TieBreakArg,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start from this position instead of the empty board
    #[arg(long)]
    pub from: Option<String>,
}

pub fn execute(args: PlayArgs, common: CommonConfig) -> Result<()> {
    let oracle: Box<dyn Oracle> = match args.oracle {
        OracleArg::Database => Box::new(build_with_spinner(
            &common.build_config(EnumerationArg::default()),
            common.progress,
        )?),
        OracleArg::Search => Box::new(AlphaBeta::new(common.trace())),
    };

    let start = match &args.from {
        Some(key) => key.parse::<Position>()?,
        None => Position::new(),
    };
    let mut game = Game::from_position(start)?;

    let mut config = PickerConfig::new().with_tie_break(args.tie_break.into());
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut picker = MovePicker::new(config);

    let human: Mark = args.human.into();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_over() {
        let position = game.current();
        println!("\n{}\n", position.render());

        if position.to_play()? == human {
            print!("Move (0-8): ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                println!("\nInput closed.");
                return Ok(());
            };
            let line = line.context("failed to read move")?;
            let cell = match line.trim().parse::<usize>() {
                Ok(cell) => cell,
                Err(_) => {
                    println!("Please enter a cell number from 0 to 8.");
                    continue;
                }
            };
            if let Err(err) = game.play(cell) {
                println!("{err}");
            }
        } else {
            let cell = picker.choose(oracle.as_ref(), &position)?;
            println!("{} ({}) plays {cell}", oracle.name(), human.opponent());
            game.play(cell)?;
        }
    }

    println!("\n{}\n", game.current().render());
    match game.outcome() {
        TerminalState::Won(mark) if mark == human => println!("You win!"),
        TerminalState::Won(_) => println!("The oracle wins."),
        _ => println!("Draw."),
    }
    Ok(())
}
