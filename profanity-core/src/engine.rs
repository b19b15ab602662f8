// profanity-core/src/engine.rs
//! Defines the core `FilterEngine` trait.
//!
//! The trait decouples callers (the CLI, headless helpers, embedding
//! applications) from the concrete matching implementation.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use crate::config::FilterConfig;
use crate::filter_match::{FilterMatch, SanitiseResult};

/// A bad word filter.
pub trait FilterEngine: Send + Sync {
    /// Finds every bad word in `input` without modifying it.
    ///
    /// Matches are ordered by ascending offset; matches at the same offset
    /// keep `bad_words` order. An empty vector means the input is clean.
    ///
    /// # Errors
    /// Fails when the current configuration produces a pattern that cannot
    /// be compiled.
    fn check(&self, input: &str) -> Result<Vec<FilterMatch>>;

    /// Finds every bad word in `input` and replaces it using the configured
    /// substitution.
    ///
    /// Results are ordered by offset with the longest match first at a shared
    /// offset. Input text is replaced at most once: a match lying inside an
    /// earlier one is marked `overlapped`, and one that sticks out past it only
    /// has its uncovered tail replaced.
    fn sanitise(&self, input: &str) -> Result<SanitiseResult>;

    /// Returns a reference to the engine's configuration.
    fn config(&self) -> &FilterConfig;

    /// Mutable access to the configuration. Changes apply to the next call.
    fn config_mut(&mut self) -> &mut FilterConfig;
}
