// File: src/core/engine.rs
use crate::config::ClassifierConfig;
use crate::core::model::Model;
use crate::core::types::Label;
use crate::error::Result;
use crate::learning::TrainingSet;
use tracing::debug;

/// Trains and applies the two-class scorer. The standard and legacy
/// variants differ only in their configuration.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn standard() -> Self {
        Self::new(ClassifierConfig::standard())
    }

    pub fn legacy() -> Self {
        Self::new(ClassifierConfig::legacy())
    }

    /// Validates the labeled words and builds a fresh model from them.
    pub fn train<W, L>(&self, train_words: &[W], train_labels: &[L]) -> Result<Model>
    where
        W: AsRef<str>,
        L: AsRef<str>,
    {
        let set =
            TrainingSet::from_labeled(train_words, train_labels, self.config.allow_single_class)?;
        debug!(
            spanish = set.class_size(Label::Spanish),
            french = set.class_size(Label::French),
            "training set accepted"
        );
        Ok(Model::train(self.config.clone(), &set))
    }

    /// Trains on the labeled words, then labels every test word in order.
    /// Nothing is returned if the training input is rejected.
    pub fn classify<W, L, T>(
        &self,
        train_words: &[W],
        train_labels: &[L],
        test_words: &[T],
    ) -> Result<Vec<Label>>
    where
        W: AsRef<str>,
        L: AsRef<str>,
        T: AsRef<str>,
    {
        let model = self.train(train_words, train_labels)?;
        Ok(model.predict_batch(test_words))
    }
}
