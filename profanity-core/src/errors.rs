//! errors.rs - Custom error types for the profanity-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `profanity-core` library.
///
/// Marked `#[non_exhaustive]`: new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FilterError {
    #[error("Failed to compile pattern for bad word '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Bad word '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Invalid filter configuration: {0}")]
    InvalidConfig(String),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
