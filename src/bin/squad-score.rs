//! Command-line interface for rust-squad-score.

use anyhow::Result;
use clap::Parser;
use rust_squad_score::cli::{cmd_evaluate, cmd_score, Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Score(args) => cmd_score(args),
        Command::Evaluate(args) => cmd_evaluate(args),
    }
}
