// File: src/core/model.rs
use crate::config::{ClassifierConfig, PriorPolicy};
use crate::core::counter::FeatureCounts;
use crate::core::features::{normalize, FeatureExtractor};
use crate::core::types::{ClassScores, Label};
use crate::error::{ClassifyError, Result};
use crate::learning::{LearningEngine, TrainingSet};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Aggregated feature counts over every training word of one class.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassFingerprint {
    pub(crate) counts: FeatureCounts,
    pub(crate) examples: usize,
}

impl ClassFingerprint {
    pub fn counts(&self) -> &FeatureCounts {
        &self.counts
    }

    /// Sum of all feature counts, the normalization denominator.
    pub fn total(&self) -> u64 {
        self.counts.total()
    }

    /// Number of training words folded into this fingerprint.
    pub fn examples(&self) -> usize {
        self.examples
    }

    /// Add-one smoothed log probability of `token`:
    /// `ln((count + 1) / (total + vocab_size))`. Unseen tokens read as
    /// count zero, so the result is always finite.
    pub fn log_likelihood(&self, token: &str, vocab_size: usize) -> f64 {
        let denominator = (self.total() + vocab_size as u64).max(1);
        ((self.counts.get(token) + 1) as f64 / denominator as f64).ln()
    }
}

/// Trained two-class model. Built once from a training set, then only read.
#[derive(Debug, Clone)]
pub struct Model {
    config: ClassifierConfig,
    fingerprints: [ClassFingerprint; 2],
    log_priors: [f64; 2],
    vocab_size: usize,
}

impl Model {
    pub fn train(config: ClassifierConfig, set: &TrainingSet) -> Self {
        let extractor = FeatureExtractor::new(&config.training_features, &config.patterns);
        let learner = LearningEngine::new(extractor);

        let fingerprints = Label::ALL.map(|label| learner.build_fingerprint(set.words(label)));

        let vocab: HashSet<&str> = fingerprints
            .iter()
            .flat_map(|fingerprint| fingerprint.counts.keys())
            .collect();
        let vocab_size = vocab.len();

        let total_words = set.len() as f64;
        let log_priors = Label::ALL.map(|label| {
            let class_size = set.class_size(label);
            if class_size == 0 {
                return f64::NEG_INFINITY;
            }
            match config.priors {
                PriorPolicy::Empirical => (class_size as f64 / total_words).ln(),
                PriorPolicy::Uniform => 0.5f64.ln(),
            }
        });

        for label in Label::ALL {
            let fingerprint = &fingerprints[label.index()];
            debug!(
                class = %label,
                examples = fingerprint.examples(),
                distinct = fingerprint.counts.len(),
                total = fingerprint.total(),
                "built class fingerprint"
            );
        }
        debug!(vocab_size, "model trained");

        Self {
            config,
            fingerprints,
            log_priors,
            vocab_size,
        }
    }

    /// Log scores for `word` under each class, bias included. Every
    /// query token occurrence contributes once per unit of query weight.
    pub fn scores(&self, word: &str) -> ClassScores {
        let word = normalize(word);
        let extractor = FeatureExtractor::new(&self.config.query_features, &self.config.patterns);
        let tokens = extractor.tokens(&word);

        let [spanish, french] = Label::ALL.map(|label| {
            let fingerprint = &self.fingerprints[label.index()];
            let likelihood: f64 = tokens
                .iter()
                .map(|(token, weight)| {
                    *weight as f64 * fingerprint.log_likelihood(token, self.vocab_size)
                })
                .sum();
            self.log_priors[label.index()] + likelihood + self.config.bias.get(label)
        });

        let scores = ClassScores { spanish, french };
        trace!(word = %word, tokens = tokens.len(), spanish, french, "scored word");
        scores
    }

    pub fn predict(&self, word: &str) -> Label {
        self.scores(word).winner()
    }

    pub fn predict_batch<W: AsRef<str>>(&self, words: &[W]) -> Vec<Label> {
        words.iter().map(|word| self.predict(word.as_ref())).collect()
    }

    /// Fraction of `words` whose prediction matches `labels`.
    pub fn accuracy<W: AsRef<str>>(&self, words: &[W], labels: &[Label]) -> Result<f64> {
        if words.len() != labels.len() {
            return Err(ClassifyError::InvalidInput(format!(
                "{} words but {} labels",
                words.len(),
                labels.len()
            )));
        }
        if words.is_empty() {
            return Err(ClassifyError::InvalidInput(
                "cannot score an empty word list".to_string(),
            ));
        }

        let correct = self
            .predict_batch(words)
            .iter()
            .zip(labels)
            .filter(|(predicted, expected)| predicted == expected)
            .count();

        Ok(correct as f64 / words.len() as f64)
    }

    pub fn fingerprint(&self, label: Label) -> &ClassFingerprint {
        &self.fingerprints[label.index()]
    }

    pub fn log_prior(&self, label: Label) -> f64 {
        self.log_priors[label.index()]
    }

    /// Distinct tokens across both fingerprints.
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}
