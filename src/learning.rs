// File: src/learning.rs
use crate::core::features::{normalize, FeatureExtractor};
use crate::core::model::ClassFingerprint;
use crate::core::types::Label;
use crate::error::{ClassifyError, Result};
use tracing::warn;

/// Training words partitioned by label and lowercased.
#[derive(Debug, Clone)]
pub struct TrainingSet {
    words: [Vec<String>; 2],
}

impl TrainingSet {
    /// Validates and partitions a labeled word list. Checks run in order:
    /// matching lengths, known labels, then class coverage.
    pub fn from_labeled<W, L>(words: &[W], labels: &[L], allow_single_class: bool) -> Result<Self>
    where
        W: AsRef<str>,
        L: AsRef<str>,
    {
        if words.len() != labels.len() {
            return Err(ClassifyError::InvalidInput(format!(
                "{} training words but {} labels",
                words.len(),
                labels.len()
            )));
        }

        let labels = labels
            .iter()
            .map(|label| label.as_ref().parse::<Label>())
            .collect::<Result<Vec<_>>>()?;

        let mut partition: [Vec<String>; 2] = [Vec::new(), Vec::new()];
        for (word, label) in words.iter().zip(labels) {
            partition[label.index()].push(normalize(word.as_ref()));
        }

        let set = Self { words: partition };
        set.check_coverage(allow_single_class)?;
        Ok(set)
    }

    fn check_coverage(&self, allow_single_class: bool) -> Result<()> {
        if self.is_empty() {
            return Err(ClassifyError::InvalidTrainingSet(
                "no training examples".to_string(),
            ));
        }
        for label in Label::ALL {
            if self.class_size(label) == 0 {
                if !allow_single_class {
                    return Err(ClassifyError::InvalidTrainingSet(format!(
                        "no {label} training examples"
                    )));
                }
                warn!(missing = %label, "training set covers a single class");
            }
        }
        Ok(())
    }

    pub fn words(&self, label: Label) -> &[String] {
        &self.words[label.index()]
    }

    pub fn class_size(&self, label: Label) -> usize {
        self.words[label.index()].len()
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Folds training words into class fingerprints.
pub struct LearningEngine<'a> {
    extractor: FeatureExtractor<'a>,
}

impl<'a> LearningEngine<'a> {
    pub fn new(extractor: FeatureExtractor<'a>) -> Self {
        Self { extractor }
    }

    /// Adds one already normalized word to a fingerprint.
    pub fn learn(&self, fingerprint: &mut ClassFingerprint, word: &str) {
        self.extractor.accumulate(word, &mut fingerprint.counts);
        fingerprint.examples += 1;
    }

    pub fn build_fingerprint(&self, words: &[String]) -> ClassFingerprint {
        let mut fingerprint = ClassFingerprint::default();
        for word in words {
            self.learn(&mut fingerprint, word);
        }
        fingerprint
    }
}
