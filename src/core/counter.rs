// File: src/core/counter.rs
use crate::core::types::FeatureToken;
use std::collections::HashMap;

/// A multiset of feature tokens. Missing tokens read as zero and the
/// running total always equals the sum of all counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureCounts {
    counts: HashMap<FeatureToken, u64>,
    total: u64,
}

impl FeatureCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments `token` by `n`. A zero increment is ignored so the
    /// key set only ever holds tokens that were actually observed.
    pub fn add(&mut self, token: impl Into<FeatureToken>, n: u64) {
        if n == 0 {
            return;
        }
        *self.counts.entry(token.into()).or_insert(0) += n;
        self.total += n;
    }

    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
