//! compiler.rs - Manages the compilation and caching of bad word patterns.
//!
//! This module turns a [`PatternKey`] into [`CompiledPatterns`], one regex
//! per bad word. Compiled sets are kept in a global, shared cache keyed by
//! the pattern-relevant configuration fields, so a configuration change is a
//! cache miss and never serves stale patterns.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::{PatternKey, MAX_PATTERN_LENGTH};
use crate::errors::FilterError;
use crate::pattern::builder::PatternBuilder;

/// Upper bound on distinct configurations kept in the cache.
const MAX_CACHED_CONFIGS: usize = 64;

/// The compiled pattern for one bad word.
#[derive(Debug)]
pub struct CompiledPattern {
    /// The base word as configured.
    pub base_word: String,
    /// Position of the base word in `bad_words`.
    pub index: usize,
    pub regex: Regex,
}

/// Compiled patterns for every non-empty bad word, in `bad_words` order.
#[derive(Debug)]
pub struct CompiledPatterns {
    pub patterns: Vec<CompiledPattern>,
}

lazy_static! {
    static ref COMPILED_PATTERNS_CACHE: RwLock<HashMap<PatternKey, Arc<CompiledPatterns>>> =
        RwLock::new(HashMap::new());
}

/// Builds and compiles the pattern for a single word.
///
/// Returns `Ok(None)` for an empty word.
pub fn compile_pattern(word: &str, key: &PatternKey) -> Result<Option<Regex>, FilterError> {
    let Some(pattern) = PatternBuilder::new(key).build(word) else {
        return Ok(None);
    };

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(FilterError::PatternLengthExceeded(
            word.to_string(),
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    debug!("Compiling pattern for '{}': {}", word, pattern);
    RegexBuilder::new(&pattern)
        .case_insensitive(!key.case_sensitive)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map(Some)
        .map_err(|e| FilterError::PatternCompilation(word.to_string(), e))
}

/// Compiles a pattern for every bad word in `key`.
///
/// Empty words are skipped with a warning. All failures are gathered and
/// reported as one error.
pub fn compile_patterns(key: &PatternKey) -> Result<CompiledPatterns, FilterError> {
    debug!("Starting compilation of {} bad word patterns.", key.bad_words.len());

    let mut patterns = Vec::with_capacity(key.bad_words.len());
    let mut compilation_errors = Vec::new();

    for (index, word) in key.bad_words.iter().enumerate() {
        match compile_pattern(word, key) {
            Ok(Some(regex)) => patterns.push(CompiledPattern {
                base_word: word.clone(),
                index,
                regex,
            }),
            Ok(None) => warn!("Skipping bad word at position {} because it is empty.", index),
            Err(e) => compilation_errors.push(e),
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        return Err(FilterError::Fatal(format!(
            "Failed to compile {} pattern(s):\n{}",
            compilation_errors.len(),
            error_message
        )));
    }

    debug!("Finished compiling patterns. Total compiled: {}.", patterns.len());
    Ok(CompiledPatterns { patterns })
}

/// Gets `CompiledPatterns` for `key` from the cache, compiling on a miss.
pub fn get_or_compile_patterns(key: &PatternKey) -> Result<Arc<CompiledPatterns>, FilterError> {
    {
        let cache = COMPILED_PATTERNS_CACHE
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(patterns) = cache.get(key) {
            debug!("Serving compiled patterns from cache.");
            return Ok(Arc::clone(patterns));
        }
    }

    debug!("Compiled patterns not found in cache. Compiling now.");
    let compiled = Arc::new(compile_patterns(key)?);

    let mut cache = COMPILED_PATTERNS_CACHE
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    if cache.len() >= MAX_CACHED_CONFIGS {
        debug!("Pattern cache full ({} entries), clearing.", cache.len());
        cache.clear();
    }
    cache.insert(key.clone(), Arc::clone(&compiled));
    Ok(compiled)
}
