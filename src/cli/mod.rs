pub mod types;
mod evaluate;
mod score;

pub use types::{Cli, Command, EvaluateArgs, ScoreArgs};
pub use evaluate::cmd_evaluate;
pub use score::cmd_score;
