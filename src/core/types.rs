// src/core/types.rs
use crate::error::ClassifyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A symbolic feature key such as `letter_a`, `duo_ca` or `es_cion`.
pub type FeatureToken = String;

/// One of the two languages a word can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Spanish,
    French,
}

impl Label {
    /// Both labels, in the order per-class tables are indexed.
    pub const ALL: [Label; 2] = [Label::Spanish, Label::French];

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Spanish => "spanish",
            Label::French => "french",
        }
    }

    /// Position of this label in per-class arrays.
    pub(crate) fn index(self) -> usize {
        match self {
            Label::Spanish => 0,
            Label::French => 1,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spanish" => Ok(Label::Spanish),
            "french" => Ok(Label::French),
            other => Err(ClassifyError::InvalidLabel(other.to_string())),
        }
    }
}

/// Log scores for a single query word, bias already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassScores {
    pub spanish: f64,
    pub french: f64,
}

impl ClassScores {
    pub fn get(&self, label: Label) -> f64 {
        match label {
            Label::Spanish => self.spanish,
            Label::French => self.french,
        }
    }

    /// Spanish only wins on a strictly greater score.
    pub fn winner(&self) -> Label {
        if self.spanish > self.french {
            Label::Spanish
        } else {
            Label::French
        }
    }
}
