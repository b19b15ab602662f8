//! strategy.rs - Substitution strategies applied to matched bad words.
//!
//! A substitution maps a configuration and a match to replacement text. The
//! built-in strategies form a closed enum; callers may also supply their own
//! function through [`Substitution::custom`].
//!
//! Strategies that need replacement material (`replacement_characters` or
//! `replacement_words`) degrade to [`Strategy::Empty`] when that list is empty.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use once_cell::sync::Lazy;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::FilterConfig;
use crate::errors::FilterError;
use crate::filter_match::FilterMatch;

// Name lookup table for parsing.
static STRATEGIES_BY_NAME: Lazy<HashMap<&'static str, Strategy>> =
    Lazy::new(|| Strategy::ALL.iter().map(|s| (s.name(), *s)).collect());

/// The built-in substitution strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Keep the matched text unchanged (detection only).
    Ignore,
    /// Remove the matched text.
    #[default]
    Empty,
    /// One random replacement character per character of the match.
    RandomSymbols,
    /// The first replacement character, repeated.
    FixedSymbols,
    /// One randomly chosen replacement character, repeated.
    FixedRandomSymbols,
    /// The replacement word at the base word's index in `bad_words`.
    SubstituteWord,
    /// A random replacement word.
    RandomWord,
    /// The first replacement word.
    FixedWord,
}

impl Strategy {
    pub const ALL: [Strategy; 8] = [
        Strategy::Ignore,
        Strategy::Empty,
        Strategy::RandomSymbols,
        Strategy::FixedSymbols,
        Strategy::FixedRandomSymbols,
        Strategy::SubstituteWord,
        Strategy::RandomWord,
        Strategy::FixedWord,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Ignore => "ignore",
            Strategy::Empty => "empty",
            Strategy::RandomSymbols => "random-symbols",
            Strategy::FixedSymbols => "fixed-symbols",
            Strategy::FixedRandomSymbols => "fixed-random-symbols",
            Strategy::SubstituteWord => "substitute-word",
            Strategy::RandomWord => "random-word",
            Strategy::FixedWord => "fixed-word",
        }
    }

    /// Lenient lookup: unknown names fall back to [`Strategy::Empty`].
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!("Unknown substitution strategy '{}', falling back to 'empty'.", name);
            Strategy::Empty
        })
    }

    /// Computes the replacement for `m`.
    pub fn apply(&self, config: &FilterConfig, m: &FilterMatch) -> String {
        match self {
            Strategy::Ignore => m.word.clone(),
            Strategy::Empty => String::new(),
            Strategy::RandomSymbols => random_symbols(config, m),
            Strategy::FixedSymbols => fixed_symbols(config, m),
            Strategy::FixedRandomSymbols => fixed_random_symbols(config, m),
            Strategy::SubstituteWord => substitute_word(config, m),
            Strategy::RandomWord => random_word(config),
            Strategy::FixedWord => config.replacement_words.first().cloned().unwrap_or_default(),
        }
    }
}

impl FromStr for Strategy {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STRATEGIES_BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| FilterError::InvalidConfig(format!("Unknown substitution strategy '{}'", s)))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn random_symbols(config: &FilterConfig, m: &FilterMatch) -> String {
    let symbols = &config.replacement_characters;
    let mut rng = rand::rng();
    // `choose` only yields None for an empty list, which collapses the whole string to "".
    m.word
        .chars()
        .map(|_| symbols.choose(&mut rng).copied())
        .collect::<Option<String>>()
        .unwrap_or_default()
}

fn fixed_symbols(config: &FilterConfig, m: &FilterMatch) -> String {
    match config.replacement_characters.first() {
        Some(c) => repeat_char(*c, m.char_len()),
        None => String::new(),
    }
}

fn fixed_random_symbols(config: &FilterConfig, m: &FilterMatch) -> String {
    match config.replacement_characters.choose(&mut rand::rng()) {
        Some(c) => repeat_char(*c, m.char_len()),
        None => String::new(),
    }
}

fn substitute_word(config: &FilterConfig, m: &FilterMatch) -> String {
    let words = &config.replacement_words;
    if words.is_empty() {
        return String::new();
    }
    let index = config.bad_word_index(&m.base_word).unwrap_or(0);
    words[index % words.len()].clone()
}

fn random_word(config: &FilterConfig) -> String {
    config
        .replacement_words
        .choose(&mut rand::rng())
        .cloned()
        .unwrap_or_default()
}

fn repeat_char(c: char, count: usize) -> String {
    std::iter::repeat(c).take(count).collect()
}

/// Signature of a caller-supplied substitution. Returning `None` means "no
/// replacement" and is treated as the empty string.
pub type SubstitutionFn = dyn Fn(&FilterConfig, &FilterMatch) -> Option<String> + Send + Sync;

/// The substitution selected for a filter: a built-in strategy or a
/// caller-supplied function.
#[derive(Clone)]
pub enum Substitution {
    Builtin(Strategy),
    Custom(Arc<SubstitutionFn>),
}

impl Substitution {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&FilterConfig, &FilterMatch) -> Option<String> + Send + Sync + 'static,
    {
        Substitution::Custom(Arc::new(f))
    }

    /// Lenient lookup by strategy name, see [`Strategy::from_name`].
    pub fn from_name(name: &str) -> Self {
        Substitution::Builtin(Strategy::from_name(name))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Substitution::Builtin(strategy) => strategy.name(),
            Substitution::Custom(_) => "custom",
        }
    }

    /// Resolves the replacement text for `m`.
    pub fn substitute(&self, config: &FilterConfig, m: &FilterMatch) -> String {
        match self {
            Substitution::Builtin(strategy) => strategy.apply(config, m),
            Substitution::Custom(f) => f(config, m).unwrap_or_default(),
        }
    }
}

impl Default for Substitution {
    fn default() -> Self {
        Substitution::Builtin(Strategy::Empty)
    }
}

impl From<Strategy> for Substitution {
    fn from(strategy: Strategy) -> Self {
        Substitution::Builtin(strategy)
    }
}

impl fmt::Debug for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Substitution::Builtin(strategy) => f.debug_tuple("Builtin").field(strategy).finish(),
            Substitution::Custom(func) => f
                .debug_tuple("Custom")
                .field(&Arc::as_ptr(func).cast::<()>())
                .finish(),
        }
    }
}

impl PartialEq for Substitution {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Substitution::Builtin(a), Substitution::Builtin(b)) => a == b,
            (Substitution::Custom(a), Substitution::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for Substitution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Substitution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Substitution::from_name(&name))
    }
}
