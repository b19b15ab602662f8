//! Configuration management for `profanity-core`.
//!
//! This module defines the filter configuration: the bad word list, the
//! replacement material consumed by substitution strategies, the affix and
//! alternative-character tables used to build patterns, and the behaviour
//! toggles. It handles (de)serialization of YAML configurations and provides
//! utilities for loading and validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::errors::FilterError;
use crate::pattern::compiler::compile_patterns;
use crate::strategy::{Strategy, Substitution};

/// Maximum allowed length for a generated pattern string.
pub const MAX_PATTERN_LENGTH: usize = 4096;

const DEFAULT_FILTER_YAML: &str = include_str!("../config/default_filter.yaml");

/// The complete configuration of a filter instance.
///
/// All fields are public so callers can adjust them between calls. Patterns
/// are resolved from the current field values on every `check`/`sanitise`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Base words to detect. Order matters for `substitute-word` and for
    /// tie-breaking matches found at the same offset.
    pub bad_words: Vec<String>,
    /// Words consumed by the word-based strategies.
    pub replacement_words: Vec<String>,
    /// Symbols consumed by the symbol-based strategies.
    #[serde(with = "chars_as_string")]
    pub replacement_characters: Vec<char>,
    /// Alternative spellings for single characters, e.g. `o -> [0, oo]`.
    pub alternative_characters: BTreeMap<char, Vec<String>>,
    /// Optional strings tolerated in front of a bad word.
    pub prefixes: Vec<String>,
    /// Optional strings tolerated after a bad word.
    pub postfixes: Vec<String>,
    pub use_alternative_characters: bool,
    pub use_prefixes: bool,
    pub use_postfixes: bool,
    /// Require a `\b` word boundary on both sides of a match.
    pub use_word_boundaries: bool,
    pub case_sensitive: bool,
    /// Swallow the space left behind when a word between two spaces is
    /// replaced with nothing.
    pub collapse_double_spaces: bool,
    /// The substitution applied to every match by `sanitise`.
    #[serde(alias = "substitution_function")]
    pub substitution: Substitution,
}

impl Default for FilterConfig {
    fn default() -> Self {
        let alternatives: [(char, &[&str]); 9] = [
            ('a', &["4"]),
            ('e', &["3"]),
            ('i', &["1", "!", "l"]),
            ('l', &["1", "!", "i"]),
            ('o', &["0", "oo"]),
            ('s', &["5", "$"]),
            ('t', &["7"]),
            ('x', &["*", "ks"]),
            ('z', &["2"]),
        ];

        Self {
            bad_words: to_strings(&["provide", "your", "own", "bad", "words"]),
            replacement_words: to_strings(&["fiddlesticks", "sugar", "crackers", "bleep", "wibble"]),
            replacement_characters: "#!?$&*%@".chars().collect(),
            alternative_characters: alternatives
                .iter()
                .map(|(c, alts)| (*c, to_strings(alts)))
                .collect(),
            prefixes: Vec::new(),
            postfixes: to_strings(&["e", "er", "ing", "y", "ty", "py", "head", "face"]),
            use_alternative_characters: true,
            use_prefixes: true,
            use_postfixes: true,
            use_word_boundaries: true,
            case_sensitive: false,
            collapse_double_spaces: true,
            substitution: Substitution::Builtin(Strategy::Empty),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The subset of [`FilterConfig`] that determines how patterns are built.
///
/// Used as the key of the compiled-pattern cache: any change to one of these
/// fields yields a different key and therefore a fresh compilation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatternKey {
    pub bad_words: Vec<String>,
    pub alternative_characters: BTreeMap<char, Vec<String>>,
    pub prefixes: Vec<String>,
    pub postfixes: Vec<String>,
    pub use_alternative_characters: bool,
    pub use_prefixes: bool,
    pub use_postfixes: bool,
    pub use_word_boundaries: bool,
    pub case_sensitive: bool,
}

impl FilterConfig {
    /// Loads a filter configuration from a YAML file.
    ///
    /// Fields missing from the file keep their [`Default`] values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading filter configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        info!(
            "Loaded {} bad words from file {}.",
            config.bad_words.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: FilterConfig = serde_yml::from_str(yaml).context("Invalid filter YAML")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the stock configuration shipped with the crate.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default filter configuration from embedded string...");
        let config: FilterConfig = serde_yml::from_str(DEFAULT_FILTER_YAML)
            .context("Failed to parse default filter configuration")?;
        debug!("Loaded {} default bad words.", config.bad_words.len());
        Ok(config)
    }

    /// Extracts the fields that influence pattern construction.
    pub fn pattern_key(&self) -> PatternKey {
        PatternKey {
            bad_words: self.bad_words.clone(),
            alternative_characters: self.alternative_characters.clone(),
            prefixes: self.prefixes.clone(),
            postfixes: self.postfixes.clone(),
            use_alternative_characters: self.use_alternative_characters,
            use_prefixes: self.use_prefixes,
            use_postfixes: self.use_postfixes,
            use_word_boundaries: self.use_word_boundaries,
            case_sensitive: self.case_sensitive,
        }
    }

    /// Index of the first occurrence of `base_word` in the bad word list.
    pub fn bad_word_index(&self, base_word: &str) -> Option<usize> {
        self.bad_words.iter().position(|w| w == base_word)
    }

    /// Checks the configuration for entries that would produce broken or
    /// zero-width patterns, then compiles every pattern once.
    ///
    /// All problems are collected and reported together.
    pub fn validate(&self) -> Result<(), FilterError> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for (i, word) in self.bad_words.iter().enumerate() {
            if word.is_empty() {
                errors.push(format!("Bad word at position {} is empty.", i));
            } else if !seen.insert(word.as_str()) {
                warn!("Duplicate bad word '{}' at position {}.", word, i);
            }
        }

        for (label, affixes) in [("prefix", &self.prefixes), ("postfix", &self.postfixes)] {
            if affixes.iter().any(String::is_empty) {
                errors.push(format!("The {} list contains an empty entry.", label));
            }
        }

        for (c, alternatives) in &self.alternative_characters {
            if alternatives.iter().any(String::is_empty) {
                errors.push(format!("Alternative characters for '{}' contain an empty entry.", c));
            }
        }

        if errors.is_empty() {
            if let Err(e) = compile_patterns(&self.pattern_key()) {
                errors.push(e.to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FilterError::InvalidConfig(errors.join("\n")))
        }
    }
}

/// Stores `replacement_characters` as a plain string (`"#!?$"`) in YAML.
mod chars_as_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(chars: &[char], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&chars.iter().collect::<String>())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<char>, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.chars().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_match_builtin_defaults() {
        let loaded = FilterConfig::load_default().unwrap();
        assert_eq!(loaded, FilterConfig::default());
    }

    #[test]
    fn test_default_config_is_valid() {
        FilterConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = FilterConfig::from_yaml_str("bad_words: [heck]\ncase_sensitive: true\n").unwrap();
        assert_eq!(config.bad_words, vec!["heck".to_string()]);
        assert!(config.case_sensitive);
        assert_eq!(config.postfixes, FilterConfig::default().postfixes);
        assert_eq!(config.replacement_characters, FilterConfig::default().replacement_characters);
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let config = FilterConfig {
            bad_words: vec!["ok".to_string(), String::new()],
            prefixes: vec![String::new()],
            ..FilterConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("position 1 is empty"));
        assert!(err.contains("prefix list contains an empty entry"));
    }

    #[test]
    fn test_pattern_key_ignores_substitution_fields() {
        let a = FilterConfig::default();
        let b = FilterConfig {
            replacement_words: vec!["other".to_string()],
            substitution: Substitution::Builtin(Strategy::FixedWord),
            collapse_double_spaces: false,
            ..FilterConfig::default()
        };
        assert_eq!(a.pattern_key(), b.pattern_key());

        let c = FilterConfig { use_word_boundaries: false, ..FilterConfig::default() };
        assert_ne!(a.pattern_key(), c.pattern_key());
    }

    #[test]
    fn test_bad_word_index_uses_first_occurrence() {
        let config = FilterConfig {
            bad_words: vec!["a".to_string(), "b".to_string(), "a".to_string()],
            ..FilterConfig::default()
        };
        assert_eq!(config.bad_word_index("a"), Some(0));
        assert_eq!(config.bad_word_index("b"), Some(1));
        assert_eq!(config.bad_word_index("c"), None);
    }
}
