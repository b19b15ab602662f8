// profanity-core/src/engines/regex_engine.rs
//! A `FilterEngine` implementation that uses one regular expression per bad
//! word to find matches, then rewrites the input with the configured
//! substitution.
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Context, Result};
use log::debug;
use std::cmp::Reverse;
use std::sync::Arc;

use crate::config::FilterConfig;
use crate::engine::FilterEngine;
use crate::filter_match::{log_match_debug, log_substitution_debug, FilterMatch, SanitiseResult};
use crate::pattern::builder::WORD_GROUP;
use crate::pattern::compiler::{get_or_compile_patterns, CompiledPatterns};
use crate::splice::splice;

#[derive(Debug, Clone, Default)]
pub struct RegexFilter {
    config: FilterConfig,
}

impl RegexFilter {
    /// Creates a filter and compiles its patterns up front, so a broken
    /// configuration fails here rather than on first use.
    pub fn new(config: FilterConfig) -> Result<Self> {
        let filter = Self { config };
        filter.patterns()?;
        Ok(filter)
    }

    /// Patterns for the configuration as it is right now.
    fn patterns(&self) -> Result<Arc<CompiledPatterns>> {
        get_or_compile_patterns(&self.config.pattern_key())
            .context("Failed to compile bad word patterns for RegexFilter")
    }

    fn find_matches(&self, input: &str) -> Result<Vec<FilterMatch>> {
        let patterns = self.patterns()?;
        let mut matches = Vec::new();

        for compiled in &patterns.patterns {
            for caps in compiled.regex.captures_iter(input) {
                let word = caps
                    .name(WORD_GROUP)
                    .ok_or_else(|| anyhow!("Pattern for '{}' has no '{}' group", compiled.base_word, WORD_GROUP))?;
                let m = FilterMatch::new(compiled.base_word.as_str(), word.as_str(), word.start());
                log_match_debug(module_path!(), &m);
                matches.push(m);
            }
        }

        // Stable: equal offsets keep bad_words order.
        matches.sort_by_key(|m| m.offset);
        Ok(matches)
    }
}

impl FilterEngine for RegexFilter {
    fn check(&self, input: &str) -> Result<Vec<FilterMatch>> {
        let matches = self.find_matches(input)?;
        debug!("check found {} match(es) in {} bytes.", matches.len(), input.len());
        Ok(matches)
    }

    fn sanitise(&self, input: &str) -> Result<SanitiseResult> {
        let mut matches = self.check(input)?;
        if matches.is_empty() {
            return Ok(SanitiseResult::clean(input));
        }

        // Longest first at a shared offset, so shorter words inside it are
        // reported as overlapped instead of splitting the replacement.
        matches.sort_by_key(|m| (m.offset, Reverse(m.word.len())));

        let config = &self.config;
        debug!("Sanitising {} match(es) with '{}'.", matches.len(), config.substitution.name());
        let (output, bad_words) = splice(input, &matches, config.collapse_double_spaces, |m| {
            config.substitution.substitute(config, m)
        });
        for result in &bad_words {
            log_substitution_debug(module_path!(), result);
        }

        Ok(SanitiseResult {
            clean: false,
            bad_words,
            output,
            total_length: input.len(),
            bad_length: matches.iter().map(|m| m.word.len()).sum(),
        })
    }

    fn config(&self) -> &FilterConfig {
        &self.config
    }

    fn config_mut(&mut self) -> &mut FilterConfig {
        &mut self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{Strategy, Substitution};

    fn filter(words: &[&str]) -> RegexFilter {
        RegexFilter::new(FilterConfig {
            bad_words: words.iter().map(|w| w.to_string()).collect(),
            ..FilterConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_default_sanitise_removes_postfixed_words() {
        let f = filter(&["fuck", "shit"]);
        let input = "This is a fucking string with some shitty words in it.";
        let result = f.sanitise(input).unwrap();
        assert_eq!(result.output, "This is a string with some words in it.");
        assert!(!result.clean);
        assert_eq!(result.bad_length, "fucking".len() + "shitty".len());
        assert_eq!(result.total_length, input.len());
    }

    #[test]
    fn test_alternative_characters_detected() {
        let f = filter(&["shit"]);
        let matches = f.check("shit sh1t shi7 sh17 5hit").unwrap();
        assert_eq!(matches.len(), 5);
        let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
        assert_eq!(offsets, vec![0, 5, 10, 15, 20]);
        assert!(matches.iter().all(|m| m.base_word == "shit"));
    }

    #[test]
    fn test_substitute_word() {
        let mut f = filter(&["fuck", "shit", "cunt"]);
        f.config_mut().substitution = Substitution::Builtin(Strategy::SubstituteWord);
        let result = f.sanitise("fuck shit cunt").unwrap();
        assert_eq!(result.output, "fiddlesticks sugar crackers");
        let offsets: Vec<usize> = result.bad_words.iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![0, 13, 19]);
    }

    #[test]
    fn test_check_orders_across_bad_words() {
        let f = filter(&["shit", "fuck"]);
        let matches = f.check("fuck this shit").unwrap();
        let words: Vec<&str> = matches.iter().map(|m| m.base_word.as_str()).collect();
        assert_eq!(words, vec!["fuck", "shit"]);
    }

    #[test]
    fn test_word_boundaries() {
        let f = filter(&["ass"]);
        assert!(f.check("a classic assessment").unwrap().is_empty());

        let mut f = f;
        f.config_mut().use_word_boundaries = false;
        assert_eq!(f.check("a classic").unwrap().len(), 1);
    }

    #[test]
    fn test_clean_input() {
        let f = filter(&["shit"]);
        assert!(f.check("perfectly polite").unwrap().is_empty());
        let result = f.sanitise("perfectly polite").unwrap();
        assert!(result.clean);
        assert_eq!(result.output, "perfectly polite");
    }

    #[test]
    fn test_empty_bad_words_always_clean() {
        let f = filter(&[]);
        assert!(f.check("shit").unwrap().is_empty());
        assert!(f.sanitise("shit").unwrap().clean);
    }

    #[test]
    fn test_configuration_changes_apply_to_next_call() {
        let mut f = filter(&["heck"]);
        assert!(f.check("darn").unwrap().is_empty());
        f.config_mut().bad_words.push("darn".to_string());
        assert_eq!(f.check("darn").unwrap().len(), 1);
    }

    #[test]
    fn test_prefixes() {
        let mut f = filter(&["fuck"]);
        f.config_mut().prefixes = vec!["mother".to_string()];
        let matches = f.check("motherfucker").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word, "motherfucker");

        f.config_mut().use_prefixes = false;
        assert!(f.check("motherfucker").unwrap().is_empty());
    }

    #[test]
    fn test_custom_substitution() {
        let mut f = filter(&["shit"]);
        f.config_mut().substitution = Substitution::custom(|_, m| Some(format!("[{}]", m.word.len())));
        assert_eq!(f.sanitise("oh shit no").unwrap().output, "oh [4] no");
    }

    #[test]
    fn test_overlapping_bad_words_do_not_corrupt_output() {
        let mut f = filter(&["shit", "shithead"]);
        f.config_mut().use_postfixes = false;
        f.config_mut().substitution = Substitution::Builtin(Strategy::FixedSymbols);
        let matches = f.check("you shithead").unwrap();
        assert_eq!(matches.len(), 1, "\\b keeps 'shit' from matching inside 'shithead'");

        f.config_mut().use_word_boundaries = false;
        let matches = f.check("you shithead").unwrap();
        let words: Vec<&str> = matches.iter().map(|m| m.base_word.as_str()).collect();
        assert_eq!(words, vec!["shit", "shithead"], "check keeps bad_words order at a shared offset");

        let result = f.sanitise("you shithead").unwrap();
        assert_eq!(result.output, "you ########");
        assert_eq!(result.bad_words.len(), 2);
        assert_eq!(result.bad_words[0].base_word, "shithead");
        assert!(!result.bad_words[0].overlapped);
        assert_eq!(result.bad_words[1].base_word, "shit");
        assert!(result.bad_words[1].overlapped);
        assert_eq!(result.bad_length, 12);

        f.config_mut().substitution = Substitution::Builtin(Strategy::SubstituteWord);
        assert_eq!(f.sanitise("you shithead").unwrap().output, "you sugar");
    }

    #[test]
    fn test_partially_overlapping_words_replace_each_char_once() {
        let mut f = filter(&["shit", "ithe"]);
        f.config_mut().use_postfixes = false;
        f.config_mut().use_word_boundaries = false;
        f.config_mut().use_alternative_characters = false;
        f.config_mut().substitution = Substitution::Builtin(Strategy::FixedSymbols);

        let result = f.sanitise("shithead").unwrap();
        assert_eq!(result.output, "######ad");
        assert_eq!(result.bad_words[1].word, "ithe");
        assert_eq!(result.bad_words[1].replacement, "##");
        assert_eq!(result.bad_words[1].offset, 4);

        f.config_mut().substitution = Substitution::Builtin(Strategy::Ignore);
        assert_eq!(f.sanitise("shithead").unwrap().output, "shithead");
    }

    #[test]
    fn test_invalid_configuration_is_reported() {
        let config = FilterConfig {
            bad_words: vec!["a".repeat(crate::config::MAX_PATTERN_LENGTH)],
            ..FilterConfig::default()
        };
        assert!(RegexFilter::new(config).is_err());
    }
}
