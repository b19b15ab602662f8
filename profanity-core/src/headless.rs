// File: profanity-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use of the filter.
//! Each call builds a throwaway engine from the given configuration.

use anyhow::Result;
use crate::config::FilterConfig;
use crate::engine::FilterEngine;
use crate::engines::regex_engine::RegexFilter;
use crate::filter_match::{FilterMatch, SanitiseResult};

/// Finds every bad word in `input`. An empty vector means the input is clean.
pub fn headless_check(config: FilterConfig, input: &str) -> Result<Vec<FilterMatch>> {
    let engine: Box<dyn FilterEngine> = Box::new(RegexFilter::new(config)?);
    engine.check(input)
}

/// Fully sanitises `input` and returns the detailed result.
///
/// # Arguments
///
/// * `config` - The filter configuration (defaults plus any overrides).
/// * `input` - The string to be sanitised.
pub fn headless_sanitise(config: FilterConfig, input: &str) -> Result<SanitiseResult> {
    let engine: Box<dyn FilterEngine> = Box::new(RegexFilter::new(config)?);
    engine.sanitise(input)
}

/// Like [`headless_sanitise`], returning only the sanitised text.
pub fn headless_sanitise_string(config: FilterConfig, input: &str) -> Result<String> {
    Ok(headless_sanitise(config, input)?.output)
}
