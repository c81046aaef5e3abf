//! Explicit lookup table of named metrics.

use std::collections::HashMap;

use crate::core::metric::{Metric, SquadMetric};

/// Registry mapping metric names to their implementations.
///
/// Metrics are registered explicitly by the caller; nothing is registered
/// as an import-time side effect.
pub struct MetricRegistry {
    metrics: HashMap<String, Box<dyn Metric>>,
}

impl MetricRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            metrics: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in metrics registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SquadMetric));
        registry
    }

    /// Registers a metric under its own name, replacing any previous entry.
    pub fn register(&mut self, metric: Box<dyn Metric>) {
        self.metrics.insert(metric.name().to_string(), metric);
    }

    /// Looks up a metric by name.
    pub fn get(&self, name: &str) -> Option<&dyn Metric> {
        self.metrics.get(name).map(|m| m.as_ref())
    }

    /// Names of all registered metrics, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.metrics.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for MetricRegistry {
    fn default() -> Self {
        Self::new()
    }
}
