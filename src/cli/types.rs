//! Command-line interface for rust-squad-score.
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args)]
pub struct ScoreArgs {
    /// JSON file containing prediction records: [{"id", "prediction_text"}, ...]
    #[arg(short, long)]
    pub predictions: String,

    /// JSON file containing reference records:
    /// [{"id", "answers": {"text", "answer_start"}}, ...]
    #[arg(short, long)]
    pub references: String,

    /// Name of the metric to compute
    #[arg(long, default_value = "squad")]
    pub metric: String,

    /// Write per-question scores to this CSV file
    #[arg(long)]
    pub per_question: Option<String>,
}

#[derive(Args)]
pub struct EvaluateArgs {
    /// Dataset file in the official SQuAD shape: {"data": [...]}
    #[arg(short, long)]
    pub dataset: String,

    /// JSON file mapping question id to predicted answer text
    #[arg(short, long)]
    pub predictions: String,

    /// Write per-question scores to this CSV file
    #[arg(long)]
    pub per_question: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score prediction records against reference records
    Score(ScoreArgs),

    /// Evaluate an official-format dataset against an id -> text prediction map
    Evaluate(EvaluateArgs),
}
