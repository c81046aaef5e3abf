use anyhow::Result;
use std::fs;

use crate::cli::ScoreArgs;
use crate::core::{
    adapt_predictions, adapt_references, score_per_question, MetricRegistry, Prediction,
    QuestionScore, Reference,
};

/// Command to compute a named metric for prediction and reference record
/// files.
///
/// # Arguments
/// `args` - The CLI arguments structure containing:
///  - `predictions`: Path to the JSON file of prediction records.
///  - `references`: Path to the JSON file of reference records.
///  - `metric`: Name of the registered metric to compute.
///  - `per_question`: Optional CSV path for per-question scores.
pub fn cmd_score(args: ScoreArgs) -> Result<()> {
    let predictions: Vec<Prediction> = serde_json::from_str(&fs::read_to_string(&args.predictions)?)?;
    let references: Vec<Reference> = serde_json::from_str(&fs::read_to_string(&args.references)?)?;

    let registry = MetricRegistry::with_defaults();
    let metric = registry.get(&args.metric).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown metric: {} (available: {})",
            args.metric,
            registry.names().join(", ")
        )
    })?;

    let result = metric.compute(&predictions, &references)?;
    println!("exact_match: {:.3}", result.exact_match);
    println!("f1: {:.3}", result.f1);

    if let Some(path) = &args.per_question {
        let prediction_map = adapt_predictions(&predictions);
        let dataset = adapt_references(&references);
        write_per_question(path, &score_per_question(&dataset, &prediction_map))?;
    }

    Ok(())
}

/// Writes one CSV row per question id with its individual scores.
pub(crate) fn write_per_question(path: &str, scores: &[QuestionScore]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for score in scores {
        writer.serialize(score)?;
    }
    writer.flush()?;
    Ok(())
}
