//! `check` command: reports bad words without touching the input.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use serde_json::json;
use std::io::{self, Write};

use profanity_core::{FilterEngine, RegexFilter};

use crate::cli::CheckCommand;
use crate::commands::{load_config, read_input};
use crate::ui::summary;

/// Runs the check and returns `true` when any bad word was found.
pub fn run_check(cmd: &CheckCommand) -> Result<bool> {
    let config = load_config(&cmd.input)?;
    let input = read_input(&cmd.input)?;
    let engine = RegexFilter::new(config).context("Invalid filter configuration")?;

    let matches = engine.check(&input).context("Check failed")?;
    info!("Found {} bad word(s).", matches.len());

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    if cmd.input.json {
        let report = json!({ "clean": matches.is_empty(), "bad_words": matches });
        serde_json::to_writer_pretty(&mut writer, &report).context("Failed to write JSON report")?;
        writeln!(writer)?;
    } else {
        summary::print_matches(&matches, &mut writer, supports_color)?;
    }
    writer.flush()?;

    Ok(!matches.is_empty())
}
