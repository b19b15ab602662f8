//! Command implementations and the input/configuration handling they share.

pub mod check;
pub mod sanitise;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read};

use profanity_core::FilterConfig;

use crate::cli::InputArgs;
use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Reads the text to process from `--input-file`, or stdin otherwise.
pub fn read_input(args: &InputArgs) -> Result<String> {
    match &args.input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input from {}", path.display()))
        }
        None => {
            info!("Reading input from stdin.");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Builds the filter configuration: the `--config` file or the embedded
/// defaults, then any `--word` overrides.
pub fn load_config(args: &InputArgs) -> Result<FilterConfig> {
    let mut config = match &args.config {
        Some(path) => FilterConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => FilterConfig::load_default().context("Failed to load default configuration")?,
    };

    if !args.words.is_empty() {
        if args.only_words {
            config.bad_words.clear();
        }
        for word in &args.words {
            let word = word.trim();
            if !word.is_empty() && !config.bad_words.iter().any(|w| w == word) {
                config.bad_words.push(word.to_string());
            }
        }
    }
    debug!("Filtering with {} bad word(s).", config.bad_words.len());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str], only_words: bool) -> InputArgs {
        InputArgs {
            input_file: None,
            config: None,
            words: words.iter().map(|w| w.to_string()).collect(),
            only_words,
            json: false,
        }
    }

    #[test]
    fn test_words_extend_default_list() {
        let config = load_config(&args(&["heck", " darn "], false)).unwrap();
        assert!(config.bad_words.contains(&"provide".to_string()));
        assert!(config.bad_words.ends_with(&["heck".to_string(), "darn".to_string()]));
    }

    #[test]
    fn test_only_words_replaces_list() {
        let config = load_config(&args(&["heck", "heck", ""], true)).unwrap();
        assert_eq!(config.bad_words, vec!["heck".to_string()]);
    }
}
