//! Exclude-category set: known benign failure reasons in queue listings.
//!
//! Each category pairs a label with a compiled regular expression. A line may
//! match more than one category; matching is not mutually exclusive.

use regex::Regex;
use std::collections::BTreeMap;

use crate::error::Result;

/// Named set of benign-failure patterns, ordered by label
#[derive(Debug, Default)]
pub struct ExcludeCategories {
    categories: BTreeMap<String, Regex>,
}

/// Convert a category label into a metric name (spaces become underscores)
pub fn metric_name(label: &str) -> String {
    label.replace(' ', "_")
}

impl ExcludeCategories {
    /// Compile a label -> pattern map into a category set.
    ///
    /// Entries with an empty label or empty pattern are dropped. A pattern
    /// that fails to compile is a configuration error.
    pub fn from_patterns(patterns: &BTreeMap<String, String>) -> Result<Self> {
        let mut categories = BTreeMap::new();
        for (label, pattern) in patterns {
            if label.is_empty() || pattern.is_empty() {
                continue;
            }
            categories.insert(label.clone(), Regex::new(pattern)?);
        }
        Ok(Self { categories })
    }

    /// Labels of every category matching the given line
    pub fn matching_labels<'a>(&'a self, line: &str) -> Vec<&'a str> {
        self.categories
            .iter()
            .filter(|(_, regex)| regex.is_match(line))
            .map(|(label, _)| label.as_str())
            .collect()
    }

    /// Iterate over configured category labels
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
