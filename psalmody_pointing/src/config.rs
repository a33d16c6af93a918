// Data-driven pointing configuration.
//
// Every fixed constant the pointing engine consults lives here in
// `PointingConfig`: the vowel letters the syllable counter groups, the
// punctuation classes the tokenizer peels off each word, the characters that
// close the first half-line, the article list, and the tone codes that take
// the first-stanza accent rule. The engine never uses magic characters or
// numbers; it reads them from the config it owns.
//
// `PointingConfig::default()` reproduces the conventional English pointing
// rules. A JSON file can override any subset of fields (missing fields fall
// back to the defaults), loaded via `from_json()` / `load()`. The sample file
// `data/pointing_config.json` at the workspace root holds the defaults.
//
// All sets are `BTreeSet`s so serialized configs are stable and two configs
// compare equal regardless of the order fields were written in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Letters counted as vowels, including the tolerated accented Latin forms.
const DEFAULT_VOWELS: &str = "aeiouyáéíóúàèìòùâêîôûäëïöü";

/// Quotation marks and opening brackets stripped from the front of a word.
const DEFAULT_LEADING_PUNCTUATION: &str = "\"'\u{201C}\u{201D}\u{2018}\u{2019}([";

/// Sentence punctuation, quotation marks, and closing brackets stripped from
/// the end of a word.
const DEFAULT_TRAILING_PUNCTUATION: &str = ".,;:!?\"'\u{201C}\u{201D}\u{2018}\u{2019})&]";

/// Punctuation that ends the first half-line of a verse.
const DEFAULT_STANZA_BREAKS: &str = ",;";

const DEFAULT_ARTICLES: &[&str] = &["a", "an", "the"];

/// Normalized tone codes whose accent falls before the mid-line pause.
const DEFAULT_FIRST_STANZA_ACCENT_TONES: &[&str] = &["1", "2", "5", "6", "8"];

/// Syllables between the caesura and the end of the line.
const DEFAULT_CAESURA_OFFSET: usize = 4;

/// Failure to obtain a `PointingConfig` from disk or JSON.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read pointing config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid pointing config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Character classes, word lists, and offsets driving the pointing engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointingConfig {
    /// Lowercase letters that form vowel groups when counting syllables.
    pub vowels: BTreeSet<char>,
    /// Characters stripped from the start of a word into its leading
    /// punctuation.
    pub leading_punctuation: BTreeSet<char>,
    /// Characters stripped from the end of a word into its trailing
    /// punctuation.
    pub trailing_punctuation: BTreeSet<char>,
    /// Characters that close the first half-line when found in a word's core
    /// or trailing punctuation.
    pub stanza_breaks: BTreeSet<char>,
    /// Lowercase words the accent must not land on.
    pub articles: BTreeSet<String>,
    /// Normalized tone codes (see `tone::normalize_tone`) that place the
    /// accent on the next-to-last syllable of the first half-line.
    pub first_stanza_accent_tones: BTreeSet<String>,
    /// How many syllables before the end of the line the caesura falls.
    pub caesura_offset: usize,
}

impl Default for PointingConfig {
    fn default() -> Self {
        PointingConfig {
            vowels: DEFAULT_VOWELS.chars().collect(),
            leading_punctuation: DEFAULT_LEADING_PUNCTUATION.chars().collect(),
            trailing_punctuation: DEFAULT_TRAILING_PUNCTUATION.chars().collect(),
            stanza_breaks: DEFAULT_STANZA_BREAKS.chars().collect(),
            articles: DEFAULT_ARTICLES.iter().map(|s| s.to_string()).collect(),
            first_stanza_accent_tones: DEFAULT_FIRST_STANZA_ACCENT_TONES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            caesura_offset: DEFAULT_CAESURA_OFFSET,
        }
    }
}

impl PointingConfig {
    /// Parse a config from a JSON string. Absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    pub fn is_leading_punctuation(&self, c: char) -> bool {
        self.leading_punctuation.contains(&c)
    }

    pub fn is_trailing_punctuation(&self, c: char) -> bool {
        self.trailing_punctuation.contains(&c)
    }

    /// Whether `text` contains any half-line break character.
    pub fn has_stanza_break(&self, text: &str) -> bool {
        text.chars().any(|c| self.stanza_breaks.contains(&c))
    }

    /// Case-insensitive article check.
    pub fn is_article(&self, word: &str) -> bool {
        self.articles.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sets() {
        let config = PointingConfig::default();
        assert!(config.is_vowel('a'));
        assert!(config.is_vowel('y'));
        assert!(config.is_vowel('é'));
        assert!(config.is_vowel('ü'));
        assert!(!config.is_vowel('b'));
        assert!(config.is_leading_punctuation('\u{201C}'));
        assert!(config.is_leading_punctuation('['));
        assert!(!config.is_leading_punctuation('.'));
        assert!(config.is_trailing_punctuation('&'));
        assert!(config.is_trailing_punctuation(']'));
        assert!(!config.is_trailing_punctuation('('));
        assert_eq!(config.caesura_offset, 4);
    }

    #[test]
    fn test_is_article_case_insensitive() {
        let config = PointingConfig::default();
        assert!(config.is_article("The"));
        assert!(config.is_article("AN"));
        assert!(config.is_article("a"));
        assert!(!config.is_article("and"));
        assert!(!config.is_article(""));
    }

    #[test]
    fn test_has_stanza_break() {
        let config = PointingConfig::default();
        assert!(config.has_stanza_break(","));
        assert!(config.has_stanza_break(";\""));
        assert!(!config.has_stanza_break(".:"));
        assert!(!config.has_stanza_break(""));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PointingConfig::from_json(r#"{"caesura_offset": 3, "articles": ["the"]}"#)
            .unwrap();
        assert_eq!(config.caesura_offset, 3);
        assert_eq!(config.articles.len(), 1);
        assert_eq!(config.vowels, PointingConfig::default().vowels);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = PointingConfig::from_json(r#"{"caesura_offset": "four"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PointingConfig::load(Path::new("/nonexistent/pointing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/pointing.json"));
    }

    #[test]
    fn test_sample_config_matches_defaults() {
        let json = include_str!("../../data/pointing_config.json");
        let config = PointingConfig::from_json(json).unwrap();
        assert_eq!(config, PointingConfig::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PointingConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored = PointingConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }
}
