//! `sanitise` command: rewrites the input with the chosen substitution.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};

use profanity_core::{FilterEngine, RegexFilter, SanitiseResult, Strategy, Substitution};

use crate::cli::SanitiseCommand;
use crate::commands::{info_msg, load_config, read_input, warn_msg};
use crate::ui::{diff_viewer, summary};

pub fn run_sanitise(cmd: &SanitiseCommand, quiet: bool) -> Result<()> {
    info!("Starting sanitise operation.");
    let mut config = load_config(&cmd.input)?;
    if let Some(name) = &cmd.strategy {
        let strategy: Strategy = name.parse()?;
        config.substitution = Substitution::Builtin(strategy);
    }
    let input = read_input(&cmd.input)?;

    let engine = RegexFilter::new(config).context("Invalid filter configuration")?;
    let result = engine.sanitise(&input).context("Sanitisation failed")?;
    debug!(
        "Content sanitised. Original length: {}, sanitised length: {}",
        input.len(),
        result.output.len()
    );

    handle_primary_output(cmd, &input, &result, quiet)?;
    if !cmd.no_summary && !cmd.input.json && !quiet {
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        summary::print_summary(&result.bad_words, &mut stderr.lock(), supports_color)?;
    }

    info!("Sanitise operation completed.");
    Ok(())
}

fn handle_primary_output(cmd: &SanitiseCommand, input: &str, result: &SanitiseResult, quiet: bool) -> Result<()> {
    if let Some(path) = &cmd.output {
        if !quiet {
            info_msg(format!("Writing sanitised content to file: {}", path.display()));
        }
        let mut file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        write_result(cmd, input, result, &mut file, false)?;
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        let mut writer = stdout.lock();
        write_result(cmd, input, result, &mut writer, supports_color)?;
        writer.flush()?;
    }

    if result.bad_words.iter().any(|r| r.overlapped) && !quiet {
        warn_msg("Some matches lay inside a longer replacement and were not replaced again.");
    }
    Ok(())
}

fn write_result<W: Write>(
    cmd: &SanitiseCommand,
    input: &str,
    result: &SanitiseResult,
    writer: &mut W,
    supports_color: bool,
) -> Result<()> {
    if cmd.input.json {
        writeln!(writer, "{}", result.to_json_pretty().context("Failed to serialise result")?)?;
    } else if cmd.diff {
        diff_viewer::print_diff(input, &result.output, writer, supports_color)?;
    } else {
        write!(writer, "{}", result.output)?;
    }
    Ok(())
}
