//! Queue-output analyzer.
//!
//! Scans the captured `postqueue -p` output line by line, counting lines that
//! open a queue entry (a hexadecimal queue ID header) and tallying which
//! benign category each line matches. Header detection and category matching
//! are independent per line: postqueue listings can place a failure reason on
//! the same physical line as a header.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::core::categories::{metric_name, ExcludeCategories};

/// Reserved metric name for the total queue count
pub const QUEUE_METRIC: &str = "queue";

// A queue ID is 10 to 12 uppercase hex digits at the start of the line,
// optionally flagged active with `*`, followed by whitespace.
static QUEUE_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-F]{10,12}\*?\s+").expect("queue ID pattern compiles"));

/// Per-category counts plus the reserved total-queue slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueMetrics {
    counts: BTreeMap<String, u64>,
}

impl QueueMetrics {
    fn new(categories: &ExcludeCategories) -> Self {
        let mut counts = BTreeMap::new();
        // Every configured category appears in the result, zero if unmatched
        for label in categories.labels() {
            counts.insert(metric_name(label), 0);
        }
        counts.insert(QUEUE_METRIC.to_string(), 0);
        Self { counts }
    }

    fn increment(&mut self, name: &str) {
        *self.counts.entry(name.to_string()).or_insert(0) += 1;
    }

    /// Total number of queue entries seen
    pub fn total_queue(&self) -> u64 {
        self.counts.get(QUEUE_METRIC).copied().unwrap_or(0)
    }

    /// Sum of all excluded-category counts
    pub fn excluded_sum(&self) -> u64 {
        self.counts
            .iter()
            .filter(|(name, _)| name.as_str() != QUEUE_METRIC)
            .map(|(_, count)| count)
            .sum()
    }

    /// Queue backlog after deducting excluded categories.
    ///
    /// May be negative: overlapping categories are additive deductions
    /// against a total that counts each entry once.
    pub fn count(&self) -> i64 {
        self.total_queue() as i64 - self.excluded_sum() as i64
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

/// Classify raw postqueue output into per-category and total-queue counts
pub fn analyze(output: &str, categories: &ExcludeCategories) -> QueueMetrics {
    let mut metrics = QueueMetrics::new(categories);

    for line in output.lines() {
        for label in categories.matching_labels(line) {
            metrics.increment(&metric_name(label));
        }
        if QUEUE_ID.is_match(line) {
            metrics.increment(QUEUE_METRIC);
        }
    }

    debug!("analyze (metrics): '{:?}'", metrics);
    metrics
}
