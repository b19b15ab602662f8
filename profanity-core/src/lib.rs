// profanity-core/src/lib.rs
//! # Profanity Core Library
//!
//! `profanity-core` detects configurable "bad words" in arbitrary text, including
//! common character-substitution variants such as leet-speak (`sh1t`, `5hit`), and
//! optionally rewrites them. Every call returns structured metadata about each
//! match: its offset, the exact matched text, the base word, and the replacement.
//!
//! ## Modules
//!
//! * `config`: Defines `FilterConfig`, its defaults, YAML loading and validation.
//! * `pattern`: Builds typed pattern fragments per bad word and compiles/caches them.
//! * `filter_match`: Defines data structures for matches and sanitisation results.
//! * `strategy`: Built-in substitution strategies and caller-supplied substitutions.
//! * `splice`: Offset-safe, length-changing rewrite of the input.
//! * `engine`: Defines the `FilterEngine` trait.
//! * `engines`: Contains concrete implementations of the `FilterEngine` trait.
//! * `headless`: Convenience wrappers for one-shot use.
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use profanity_core::{FilterConfig, FilterEngine, RegexFilter, Strategy};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut config = FilterConfig::default();
//!     config.bad_words = vec!["fuck".into(), "shit".into()];
//!
//!     let mut filter = RegexFilter::new(config)?;
//!
//!     // Detection only.
//!     let matches = filter.check("shit sh1t 5hit")?;
//!     assert_eq!(matches.len(), 3);
//!
//!     // Detection plus rewrite, removing words by default.
//!     let result = filter.sanitise("This is a fucking string with some shitty words in it.")?;
//!     assert_eq!(result.output, "This is a string with some words in it.");
//!
//!     // Switch strategy between calls.
//!     filter.config_mut().substitution = Strategy::FixedSymbols.into();
//!     assert_eq!(filter.sanitise("oh shit")?.output, "oh ####");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Compilation problems surface as [`FilterError`]; engine operations return
//! `anyhow::Result` with context. Unknown strategy names and missing
//! replacement material are not errors: they degrade to removing the word.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod filter_match;
pub mod headless;
pub mod pattern;
pub mod splice;
pub mod strategy;

/// Re-exports the configuration types.
pub use config::{FilterConfig, PatternKey, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FilterError;

/// Re-exports the engine trait and its regex implementation.
pub use engine::FilterEngine;
pub use engines::regex_engine::RegexFilter;

/// Re-exports match and result types.
pub use filter_match::{FilterMatch, SanitiseResult, SubstitutionResult};

/// Re-exports substitution strategies.
pub use strategy::{Strategy, Substitution, SubstitutionFn};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_check, headless_sanitise, headless_sanitise_string};

/// Re-exports pattern building and compilation for advanced usage.
pub use pattern::builder::{Fragment, PatternBuilder, WORD_GROUP};
pub use pattern::compiler::{compile_patterns, get_or_compile_patterns, CompiledPattern, CompiledPatterns};
