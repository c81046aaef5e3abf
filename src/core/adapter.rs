//! Typed prediction/reference records and their adaptation into the shapes
//! the batch scorer consumes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A model's answer for a single question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Question id, unique within a batch
    pub id: String,
    /// Predicted answer text
    pub prediction_text: String,
}

/// Gold answer spans for a single question.
///
/// `text` and `answer_start` are parallel sequences. The character offsets
/// are accepted for schema compatibility with SQuAD records but scoring
/// never reads them, and they are not validated against any context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSet {
    pub text: Vec<String>,
    #[serde(default)]
    pub answer_start: Vec<i64>,
}

/// A gold-standard reference for a single question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
    pub answers: AnswerSet,
}

/// A reference corpus in the official SQuAD dataset shape.
///
/// Extra fields of official files (titles, contexts, question text) are
/// tolerated on deserialization and ignored by scoring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub data: Vec<Article>,
}

/// One article of a dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    pub paragraphs: Vec<Paragraph>,
}

/// One paragraph of an article, holding its question-answer groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub context: String,
    pub qas: Vec<QuestionAnswers>,
}

/// A question id with its acceptable gold answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionAnswers {
    pub id: String,
    #[serde(default)]
    pub question: String,
    pub answers: Vec<GoldAnswer>,
}

/// A single acceptable gold answer text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoldAnswer {
    pub text: String,
}

impl AsRef<str> for GoldAnswer {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Builds the id -> predicted-text map consumed by the scorer.
///
/// Records are inserted in sequence order, so when a batch contains
/// duplicate ids the last record wins.
pub fn adapt_predictions(predictions: &[Prediction]) -> HashMap<String, String> {
    predictions
        .iter()
        .map(|p| (p.id.clone(), p.prediction_text.clone()))
        .collect()
}

/// Wraps a batch of references into a single synthetic article with one
/// paragraph, expanding each reference's answer texts into [`GoldAnswer`]
/// objects. The `answer_start` offsets are dropped here.
pub fn adapt_references(references: &[Reference]) -> Dataset {
    let qas = references
        .iter()
        .map(|r| QuestionAnswers {
            id: r.id.clone(),
            question: String::new(),
            answers: r
                .answers
                .text
                .iter()
                .map(|t| GoldAnswer { text: t.clone() })
                .collect(),
        })
        .collect();

    Dataset {
        data: vec![Article {
            title: String::new(),
            paragraphs: vec![Paragraph {
                context: String::new(),
                qas,
            }],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(id: &str, text: &str) -> Prediction {
        Prediction {
            id: id.to_string(),
            prediction_text: text.to_string(),
        }
    }

    #[test]
    fn test_adapt_predictions_last_wins() {
        let map = adapt_predictions(&[
            prediction("q1", "first"),
            prediction("q2", "other"),
            prediction("q1", "second"),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map["q1"], "second");
        assert_eq!(map["q2"], "other");
    }

    #[test]
    fn test_adapt_references_shape() {
        let references = vec![Reference {
            id: "q1".to_string(),
            answers: AnswerSet {
                text: vec!["1976".to_string(), "the year 1976".to_string()],
                answer_start: vec![97, 93],
            },
        }];

        let dataset = adapt_references(&references);
        assert_eq!(dataset.data.len(), 1);
        assert_eq!(dataset.data[0].paragraphs.len(), 1);

        let qas = &dataset.data[0].paragraphs[0].qas;
        assert_eq!(qas.len(), 1);
        assert_eq!(qas[0].id, "q1");
        assert_eq!(qas[0].answers.len(), 2);
        assert_eq!(qas[0].answers[0].text, "1976");
        assert_eq!(qas[0].answers[1].text, "the year 1976");
    }

    #[test]
    fn test_adapt_empty_batch() {
        let map = adapt_predictions(&[]);
        assert!(map.is_empty());

        let dataset = adapt_references(&[]);
        assert_eq!(dataset.data.len(), 1);
        assert!(dataset.data[0].paragraphs[0].qas.is_empty());
    }

    #[test]
    fn test_reference_deserializes_without_answer_start() {
        let reference: Reference = serde_json::from_str(
            r#"{"id": "q1", "answers": {"text": ["1976"]}}"#,
        )
        .unwrap();
        assert!(reference.answers.answer_start.is_empty());
        assert_eq!(reference.answers.text, vec!["1976"]);
    }

    #[test]
    fn test_dataset_deserializes_official_shape() {
        let dataset: Dataset = serde_json::from_str(
            r#"{
                "data": [{
                    "title": "Super_Bowl_50",
                    "paragraphs": [{
                        "context": "Super Bowl 50 was an American football game.",
                        "qas": [{
                            "id": "56be4db0acb8001400a502ec",
                            "question": "Which team won Super Bowl 50?",
                            "answers": [{"text": "Denver Broncos", "answer_start": 177}]
                        }]
                    }]
                }]
            }"#,
        )
        .unwrap();

        let qa = &dataset.data[0].paragraphs[0].qas[0];
        assert_eq!(qa.answers[0].text, "Denver Broncos");
    }
}
