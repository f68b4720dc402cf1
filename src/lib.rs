// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod learning;

pub use crate::config::ClassifierConfig;
pub use crate::core::engine::Classifier;
pub use crate::core::model::Model;
pub use crate::core::types::Label;
pub use crate::error::{ClassifyError, Result};

/// Classifies `test_words` with the full feature set, empirical priors
/// and the French tie-break bias.
pub fn classify<W, L, T>(train_words: &[W], train_labels: &[L], test_words: &[T]) -> Result<Vec<Label>>
where
    W: AsRef<str>,
    L: AsRef<str>,
    T: AsRef<str>,
{
    Classifier::standard().classify(train_words, train_labels, test_words)
}

/// Classifies `test_words` with bigram features only, uniform priors and no bias.
pub fn classify_legacy<W, L, T>(
    train_words: &[W],
    train_labels: &[L],
    test_words: &[T],
) -> Result<Vec<Label>>
where
    W: AsRef<str>,
    L: AsRef<str>,
    T: AsRef<str>,
{
    Classifier::legacy().classify(train_words, train_labels, test_words)
}
