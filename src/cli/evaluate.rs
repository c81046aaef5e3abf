use anyhow::Result;
use std::collections::HashMap;
use std::fs;

use crate::cli::score::write_per_question;
use crate::cli::EvaluateArgs;
use crate::core::{compute_score, score_per_question, Dataset};

/// Command to evaluate an official-format dataset file against an
/// id -> text prediction map, the `evaluate.py <dataset> <predictions>`
/// workflow.
pub fn cmd_evaluate(args: EvaluateArgs) -> Result<()> {
    let dataset: Dataset = serde_json::from_str(&fs::read_to_string(&args.dataset)?)?;
    let predictions: HashMap<String, String> =
        serde_json::from_str(&fs::read_to_string(&args.predictions)?)?;

    let result = compute_score(&dataset, &predictions);
    println!("exact_match: {:.3}", result.exact_match);
    println!("f1: {:.3}", result.f1);

    if let Some(path) = &args.per_question {
        write_per_question(path, &score_per_question(&dataset, &predictions))?;
    }

    Ok(())
}
