// File: src/core/features.rs
use crate::core::counter::FeatureCounts;
use crate::core::types::FeatureToken;
use serde::{Deserialize, Serialize};

/// Largest `size_` bucket; every word of ten or more characters lands here.
pub const MAX_SIZE_BUCKET: usize = 5;

const SPANISH_PATTERNS: [&str; 14] = [
    "os", "ar", "er", "ir", "mente", "dad", "cion", "ll", "rr", "ia", "io", "ez", "ito", "ita",
];
const FRENCH_PATTERNS: [&str; 14] = [
    "eu", "ou", "ai", "ei", "au", "eau", "oi", "ie", "tion", "eux", "aux", "ez", "ais", "ment",
];

/// Lowercases a word before any feature is taken from it.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// How much each feature category contributes per emitted token.
/// A weight of zero switches the category off entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureWeights {
    pub letter: u64,
    pub duo: u64,
    pub trio: u64,
    pub tail: u64,
    pub head: u64,
    pub size: u64,
    pub pattern: u64,
}

impl FeatureWeights {
    /// Features taken from a single query word.
    pub const QUERY: FeatureWeights = FeatureWeights {
        letter: 1,
        duo: 1,
        trio: 0,
        tail: 1,
        head: 1,
        size: 1,
        pattern: 0,
    };

    /// Features accumulated into a class fingerprint. Tails, heads and
    /// indicative patterns count more here than on the query side.
    pub const FINGERPRINT: FeatureWeights = FeatureWeights {
        letter: 1,
        duo: 1,
        trio: 1,
        tail: 3,
        head: 2,
        size: 1,
        pattern: 3,
    };

    /// Overlapping bigrams and nothing else.
    pub const BIGRAMS: FeatureWeights = FeatureWeights {
        letter: 0,
        duo: 1,
        trio: 0,
        tail: 0,
        head: 0,
        size: 0,
        pattern: 0,
    };
}

/// Substrings whose presence hints at one language or the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternTable {
    pub spanish: Vec<String>,
    pub french: Vec<String>,
}

impl Default for PatternTable {
    fn default() -> Self {
        Self {
            spanish: SPANISH_PATTERNS.iter().map(|p| p.to_string()).collect(),
            french: FRENCH_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Turns an already normalized word into weighted feature tokens.
///
/// Emission order is fixed: letters, duos, trios, tails (1..=3),
/// heads (1..=3), the size bucket, then Spanish and French patterns in
/// table order. Lengths are counted in `char`s.
#[derive(Debug, Clone, Copy)]
pub struct FeatureExtractor<'a> {
    weights: &'a FeatureWeights,
    patterns: &'a PatternTable,
}

impl<'a> FeatureExtractor<'a> {
    pub fn new(weights: &'a FeatureWeights, patterns: &'a PatternTable) -> Self {
        Self { weights, patterns }
    }

    pub fn extract(&self, word: &str, mut emit: impl FnMut(FeatureToken, u64)) {
        let w = self.weights;
        let chars: Vec<char> = word.chars().collect();
        let len = chars.len();

        if w.letter > 0 {
            for c in &chars {
                emit(format!("letter_{c}"), w.letter);
            }
        }

        if w.duo > 0 {
            for pair in chars.windows(2) {
                emit(format!("duo_{}", pair.iter().collect::<String>()), w.duo);
            }
        }

        if w.trio > 0 {
            for triple in chars.windows(3) {
                emit(format!("trio_{}", triple.iter().collect::<String>()), w.trio);
            }
        }

        if w.tail > 0 {
            for n in (1..=3).filter(|&n| len >= n) {
                let tail: String = chars[len - n..].iter().collect();
                emit(format!("tail_{tail}"), w.tail);
            }
        }

        if w.head > 0 {
            for n in (1..=3).filter(|&n| len >= n) {
                let head: String = chars[..n].iter().collect();
                emit(format!("head_{head}"), w.head);
            }
        }

        if w.size > 0 {
            let bucket = (len / 2).min(MAX_SIZE_BUCKET);
            emit(format!("size_{bucket}"), w.size);
        }

        if w.pattern > 0 {
            // One emission per pattern, however often it occurs.
            for pattern in self.patterns.spanish.iter().filter(|p| word.contains(p.as_str())) {
                emit(format!("es_{pattern}"), w.pattern);
            }
            for pattern in self.patterns.french.iter().filter(|p| word.contains(p.as_str())) {
                emit(format!("fr_{pattern}"), w.pattern);
            }
        }
    }

    /// The weighted token sequence for one word, in emission order.
    pub fn tokens(&self, word: &str) -> Vec<(FeatureToken, u64)> {
        let mut tokens = Vec::new();
        self.extract(word, |token, weight| tokens.push((token, weight)));
        tokens
    }

    pub fn accumulate(&self, word: &str, counts: &mut FeatureCounts) {
        self.extract(word, |token, weight| counts.add(token, weight));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tokens: &[(FeatureToken, u64)]) -> Vec<&str> {
        tokens.iter().map(|(t, _)| t.as_str()).collect()
    }

    #[test]
    fn test_query_tokens_for_casa() {
        let patterns = PatternTable::default();
        let extractor = FeatureExtractor::new(&FeatureWeights::QUERY, &patterns);
        let tokens = extractor.tokens("casa");

        assert_eq!(
            names(&tokens),
            vec![
                "letter_c", "letter_a", "letter_s", "letter_a", "duo_ca", "duo_as", "duo_sa",
                "tail_a", "tail_sa", "tail_asa", "head_c", "head_ca", "head_cas", "size_2",
            ]
        );
        assert!(tokens.iter().all(|&(_, w)| w == 1));
    }

    #[test]
    fn test_fingerprint_weights_for_casa() {
        let patterns = PatternTable::default();
        let extractor = FeatureExtractor::new(&FeatureWeights::FINGERPRINT, &patterns);
        let mut counts = FeatureCounts::new();
        extractor.accumulate("casa", &mut counts);

        assert_eq!(counts.get("letter_a"), 2);
        assert_eq!(counts.get("trio_cas"), 1);
        assert_eq!(counts.get("trio_asa"), 1);
        assert_eq!(counts.get("tail_asa"), 3);
        assert_eq!(counts.get("head_ca"), 2);
        assert_eq!(counts.get("size_2"), 1);
        assert_eq!(counts.len(), 15);
        assert_eq!(counts.total(), 25);
    }

    #[test]
    fn test_patterns_emit_once_per_word() {
        let patterns = PatternTable::default();
        let extractor = FeatureExtractor::new(&FeatureWeights::FINGERPRINT, &patterns);
        let mut counts = FeatureCounts::new();
        // "arar" holds "ar" twice.
        extractor.accumulate("arar", &mut counts);
        assert_eq!(counts.get("es_ar"), 3);

        let mut counts = FeatureCounts::new();
        extractor.accumulate("chez", &mut counts);
        assert_eq!(counts.get("es_ez"), 3);
        assert_eq!(counts.get("fr_ez"), 3);
    }

    #[test]
    fn test_short_words_skip_long_heads_and_tails() {
        let patterns = PatternTable::default();
        let extractor = FeatureExtractor::new(&FeatureWeights::QUERY, &patterns);
        assert_eq!(
            names(&extractor.tokens("y")),
            vec!["letter_y", "tail_y", "head_y", "size_0"]
        );
    }

    #[test]
    fn test_empty_word_yields_only_size_zero() {
        let patterns = PatternTable::default();
        let extractor = FeatureExtractor::new(&FeatureWeights::QUERY, &patterns);
        assert_eq!(names(&extractor.tokens("")), vec!["size_0"]);
    }

    #[test]
    fn test_size_bucket_is_capped() {
        let patterns = PatternTable::default();
        let extractor = FeatureExtractor::new(&FeatureWeights::QUERY, &patterns);
        let tokens = extractor.tokens("anticonstitucionalmente");
        assert_eq!(tokens.last().map(|(t, _)| t.as_str()), Some("size_5"));
    }

    #[test]
    fn test_multibyte_characters_count_as_one() {
        let patterns = PatternTable::default();
        let extractor = FeatureExtractor::new(&FeatureWeights::QUERY, &patterns);
        let tokens = extractor.tokens("été");
        let names = names(&tokens);
        assert!(names.contains(&"duo_té"));
        assert!(names.contains(&"tail_été"));
        assert!(names.contains(&"size_1"));
    }

    #[test]
    fn test_bigram_weights_only_emit_duos() {
        let patterns = PatternTable::default();
        let extractor = FeatureExtractor::new(&FeatureWeights::BIGRAMS, &patterns);
        assert_eq!(
            names(&extractor.tokens("gato")),
            vec!["duo_ga", "duo_at", "duo_to"]
        );
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("ÉCOLE"), "école");
        assert_eq!(normalize("Casa"), "casa");
    }
}
