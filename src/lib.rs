//! Rust implementation of the SQuAD question-answering evaluation metric.

pub mod cli;
pub mod core;

// Re-export main types
pub use crate::core::{
    Metric, MetricRegistry, Prediction, Reference, SquadMetric, SquadScoreResult,
};

/// Convenient alias for a result with a boxed error.
pub type Result<T> = anyhow::Result<T>;
