// File: src/config.rs
use crate::core::features::{FeatureWeights, PatternTable};
use crate::core::types::Label;
use crate::error::{ClassifyError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Log-score offset added to the French score in the standard preset.
pub const FRENCH_BIAS: f64 = 0.06;

/// How class priors are derived from the training set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorPolicy {
    /// Relative label frequency in the training set.
    Empirical,
    /// 0.5 for each class.
    Uniform,
}

/// Additive log-score offsets, one per class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassBias {
    pub spanish: f64,
    pub french: f64,
}

impl ClassBias {
    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::Spanish => self.spanish,
            Label::French => self.french,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub training_features: FeatureWeights,
    pub query_features: FeatureWeights,
    pub priors: PriorPolicy,
    pub bias: ClassBias,
    pub patterns: PatternTable,
    /// Accept a training set that covers only one class. The missing
    /// class then gets a log prior of `-inf` and is never predicted.
    pub allow_single_class: bool,
}

impl ClassifierConfig {
    /// Full feature set, empirical priors and the French tie-break bias.
    pub fn standard() -> Self {
        Self {
            training_features: FeatureWeights::FINGERPRINT,
            query_features: FeatureWeights::QUERY,
            priors: PriorPolicy::Empirical,
            bias: ClassBias {
                spanish: 0.0,
                french: FRENCH_BIAS,
            },
            patterns: PatternTable::default(),
            allow_single_class: false,
        }
    }

    /// Bigrams on both sides, uniform priors, no bias.
    pub fn legacy() -> Self {
        Self {
            training_features: FeatureWeights::BIGRAMS,
            query_features: FeatureWeights::BIGRAMS,
            priors: PriorPolicy::Uniform,
            bias: ClassBias::default(),
            ..Self::standard()
        }
    }

    /// Parses a JSON document laid over the standard preset. Objects merge
    /// key by key at every depth, so any field left out keeps its
    /// `standard()` value; arrays and scalars replace the preset value.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let overrides: Value =
            serde_json::from_str(s).map_err(|e| ClassifyError::Config(e.to_string()))?;
        let mut merged = serde_json::to_value(Self::standard())?;
        merge_json(&mut merged, overrides);
        serde_json::from_value(merged).map_err(|e| ClassifyError::Config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ClassifyError::Config(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::from_json_str(&content)
    }
}

fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                merge_json(base.entry(key).or_insert(Value::Null), value);
            }
        }
        (base, value) => *base = value,
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_is_standard() {
        let config = ClassifierConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ClassifierConfig::standard());
    }

    #[test]
    fn test_partial_document_overrides_fields() {
        let config =
            ClassifierConfig::from_json_str(r#"{"priors": "uniform", "bias": {"french": 0.5}}"#)
                .unwrap();
        assert_eq!(config.priors, PriorPolicy::Uniform);
        assert_eq!(config.bias.french, 0.5);
        assert_eq!(config.bias.spanish, 0.0);
        assert_eq!(config.query_features, FeatureWeights::QUERY);
    }

    #[test]
    fn test_partial_patterns_keep_other_table() {
        let config = ClassifierConfig::from_json_str(r#"{"patterns":{"spanish":["os"]}}"#).unwrap();
        assert_eq!(config.patterns.spanish, vec!["os".to_string()]);
        assert_eq!(config.patterns.french, PatternTable::default().french);
    }

    #[test]
    fn test_partial_query_features_keep_preset_weights() {
        let config = ClassifierConfig::from_json_str(r#"{"query_features":{"letter":2}}"#).unwrap();
        assert_eq!(
            config.query_features,
            FeatureWeights {
                letter: 2,
                ..FeatureWeights::QUERY
            }
        );
        assert_eq!(config.training_features, FeatureWeights::FINGERPRINT);
    }

    #[test]
    fn test_partial_bias_keeps_french_offset() {
        let config = ClassifierConfig::from_json_str(r#"{"bias":{"spanish":0.1}}"#).unwrap();
        assert_eq!(config.bias.spanish, 0.1);
        assert_eq!(config.bias.french, FRENCH_BIAS);
    }

    #[test]
    fn test_non_object_document_is_config_error() {
        assert!(matches!(
            ClassifierConfig::from_json_str("[1, 2]"),
            Err(ClassifyError::Config(_))
        ));
    }

    #[test]
    fn test_legacy_preset() {
        let config = ClassifierConfig::legacy();
        assert_eq!(config.training_features, FeatureWeights::BIGRAMS);
        assert_eq!(config.query_features, FeatureWeights::BIGRAMS);
        assert_eq!(config.priors, PriorPolicy::Uniform);
        assert_eq!(config.bias, ClassBias::default());
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let legacy = ClassifierConfig::legacy();
        write!(file, "{}", serde_json::to_string(&legacy).unwrap()).unwrap();

        let loaded = ClassifierConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, legacy);
    }

    #[test]
    fn test_bad_files_are_config_errors() {
        let missing = ClassifierConfig::from_file("/definitely/not/here.json");
        assert!(matches!(missing, Err(ClassifyError::Config(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let malformed = ClassifierConfig::from_file(file.path());
        assert!(matches!(malformed, Err(ClassifyError::Config(_))));
    }
}
