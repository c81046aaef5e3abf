//! Exact-match and token-overlap F1 computation for SQuAD answers.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

use crate::core::adapter::{Dataset, QuestionAnswers};
use crate::core::normalize::{answer_tokens, normalize_answer};

/// Result of SQuAD scoring for a batch of questions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SquadScoreResult {
    /// Exact-match percentage in [0, 100]
    pub exact_match: f64,
    /// Token-overlap F1 percentage in [0, 100]
    pub f1: f64,
}

/// Scores for a single question id, in [0, 1].
#[derive(Debug, Clone, Serialize)]
pub struct QuestionScore {
    pub id: String,
    pub exact_match: f64,
    pub f1: f64,
}

/// Binary exact-match between normalized answer strings.
pub fn exact_match_score(prediction: &str, ground_truth: &str) -> f64 {
    if normalize_answer(prediction) == normalize_answer(ground_truth) {
        1.0
    } else {
        0.0
    }
}

/// Token-overlap F1 between normalized answer strings.
///
/// Precision and recall are computed over the multiset intersection of
/// whitespace tokens; no overlap (including either side normalizing to an
/// empty string) scores 0.
pub fn f1_score(prediction: &str, ground_truth: &str) -> f64 {
    let prediction_tokens = answer_tokens(prediction);
    let ground_truth_tokens = answer_tokens(ground_truth);

    let common = multiset_overlap(&prediction_tokens, &ground_truth_tokens);
    if common == 0 {
        return 0.0;
    }

    let precision = common as f64 / prediction_tokens.len() as f64;
    let recall = common as f64 / ground_truth_tokens.len() as f64;
    2.0 * precision * recall / (precision + recall)
}

/// Size of the multiset intersection of two token sequences.
fn multiset_overlap(left: &[String], right: &[String]) -> usize {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in left {
        *counts.entry(token).or_insert(0) += 1;
    }

    let mut common = 0;
    for token in right {
        if let Some(count) = counts.get_mut(token.as_str()) {
            if *count > 0 {
                *count -= 1;
                common += 1;
            }
        }
    }
    common
}

/// Maximum of `metric` over every acceptable gold answer.
///
/// An empty gold answer list scores 0.
pub fn metric_max_over_ground_truths<S: AsRef<str>>(
    metric: fn(&str, &str) -> f64,
    prediction: &str,
    ground_truths: &[S],
) -> f64 {
    ground_truths
        .iter()
        .map(|gt| metric(prediction, gt.as_ref()))
        .fold(0.0, f64::max)
}

/// Aggregates exact match and F1 over every question in the dataset.
///
/// A question whose id is absent from `predictions` receives 0 on both
/// metrics and a warning on stderr, following the SQuAD v1.1 evaluation
/// convention. An empty dataset yields a zero result rather than dividing
/// by zero.
pub fn compute_score(
    dataset: &Dataset,
    predictions: &HashMap<String, String>,
) -> SquadScoreResult {
    let per_question = score_per_question(dataset, predictions);
    if per_question.is_empty() {
        return SquadScoreResult {
            exact_match: 0.0,
            f1: 0.0,
        };
    }

    let total = per_question.len() as f64;
    let (em_sum, f1_sum) = per_question
        .iter()
        .fold((0.0, 0.0), |(em, f1), q| (em + q.exact_match, f1 + q.f1));

    SquadScoreResult {
        exact_match: 100.0 * em_sum / total,
        f1: 100.0 * f1_sum / total,
    }
}

/// Scores every question in the dataset individually, in dataset order.
pub fn score_per_question(
    dataset: &Dataset,
    predictions: &HashMap<String, String>,
) -> Vec<QuestionScore> {
    let qas: Vec<&QuestionAnswers> = dataset
        .data
        .iter()
        .flat_map(|article| article.paragraphs.iter())
        .flat_map(|paragraph| paragraph.qas.iter())
        .collect();

    qas.par_iter()
        .map(|qa| match predictions.get(&qa.id) {
            Some(prediction) => QuestionScore {
                id: qa.id.clone(),
                exact_match: metric_max_over_ground_truths(
                    exact_match_score,
                    prediction,
                    &qa.answers,
                ),
                f1: metric_max_over_ground_truths(f1_score, prediction, &qa.answers),
            },
            None => {
                eprintln!("Unanswered question {} will receive score 0.", qa.id);
                QuestionScore {
                    id: qa.id.clone(),
                    exact_match: 0.0,
                    f1: 0.0,
                }
            }
        })
        .collect()
}
