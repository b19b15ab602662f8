// profanity-core/src/filter_match.rs
//! Provides core data structures for reporting bad word matches and
//! substitutions, plus privacy-aware debug logging helpers.
//!
//! Offsets and lengths are UTF-8 byte positions in the relevant string.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Initialized once: whether matched words may appear verbatim in debug logs.
    static ref WORD_DEBUG_ALLOWED: bool = {
        std::env::var("PROFANITY_ALLOW_DEBUG_WORDS")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// A single located occurrence of a bad word in the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterMatch {
    /// The configured word whose pattern produced this match.
    pub base_word: String,
    /// The exact text matched, including any affixes.
    pub word: String,
    /// Byte offset of `word` in the original input.
    pub offset: usize,
}

impl FilterMatch {
    pub fn new(base_word: impl Into<String>, word: impl Into<String>, offset: usize) -> Self {
        Self {
            base_word: base_word.into(),
            word: word.into(),
            offset,
        }
    }

    /// Byte offset one past the end of the match.
    pub fn end(&self) -> usize {
        self.offset + self.word.len()
    }

    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }
}

/// A match after substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionResult {
    pub base_word: String,
    pub word: String,
    /// Byte offset of the replacement in the sanitised output.
    pub offset: usize,
    /// Text inserted for the match. When the match started inside an earlier
    /// replacement, this replaces only its uncovered tail.
    pub replacement: String,
    /// Set when the match lay entirely inside text already replaced by an
    /// earlier match; such a match leaves the output untouched.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub overlapped: bool,
}

/// The outcome of a `sanitise` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitiseResult {
    pub clean: bool,
    pub bad_words: Vec<SubstitutionResult>,
    pub output: String,
    /// Byte length of the input.
    pub total_length: usize,
    /// Sum of the byte lengths of every matched word, before replacement.
    pub bad_length: usize,
}

impl SanitiseResult {
    /// The result for an input without any bad words.
    pub fn clean(input: &str) -> Self {
        Self {
            clean: true,
            bad_words: Vec::new(),
            output: input.to_string(),
            total_length: input.len(),
            bad_length: 0,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(word: &str) -> String {
    if *WORD_DEBUG_ALLOWED {
        word.to_string()
    } else {
        redact_sensitive(word)
    }
}

pub fn log_match_debug(module_path: &str, m: &FilterMatch) {
    debug!(
        "{} Found match for '{}' at offset {}: '{}'",
        module_path,
        get_loggable_content(&m.base_word),
        m.offset,
        get_loggable_content(&m.word)
    );
}

pub fn log_substitution_debug(module_path: &str, result: &SubstitutionResult) {
    debug!(
        "{} Substitution at output offset {}: Original='{}', Replacement='{}'{}",
        module_path,
        result.offset,
        get_loggable_content(&result.word),
        result.replacement,
        if result.overlapped { " (overlapped)" } else { "" }
    );
}
