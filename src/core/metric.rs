//! Named metric abstraction over prediction/reference batches.

use crate::core::adapter::{adapt_predictions, adapt_references, Prediction, Reference};
use crate::core::score::{compute_score, SquadScoreResult};
use crate::Result;

/// A named evaluation metric computed over a batch of prediction and
/// reference records matched by shared question id.
pub trait Metric: Send + Sync {
    /// Registry name of the metric (e.g., "squad").
    fn name(&self) -> &'static str;

    /// One-line human-readable description.
    fn description(&self) -> &'static str;

    /// Computes the metric for a batch.
    fn compute(
        &self,
        predictions: &[Prediction],
        references: &[Reference],
    ) -> Result<SquadScoreResult>;
}

/// The SQuAD v1.1 exact-match / F1 metric.
///
/// Adapts the record batches into the id -> text map and single-article
/// dataset the batch scorer expects, then delegates to
/// [`compute_score`](crate::core::compute_score). Mismatched id sets are not
/// pre-validated; the scorer's score-0-and-warn convention applies.
pub struct SquadMetric;

impl Metric for SquadMetric {
    fn name(&self) -> &'static str {
        "squad"
    }

    fn description(&self) -> &'static str {
        "SQuAD v1.1 exact match and token-overlap F1, as percentages in [0, 100]"
    }

    fn compute(
        &self,
        predictions: &[Prediction],
        references: &[Reference],
    ) -> Result<SquadScoreResult> {
        let prediction_map = adapt_predictions(predictions);
        let dataset = adapt_references(references);
        Ok(compute_score(&dataset, &prediction_map))
    }
}
