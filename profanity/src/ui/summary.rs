//! Human-readable reports of matches and substitutions.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use profanity_core::{FilterMatch, SubstitutionResult};

use crate::ui::output_format::paint;

/// One line per match: offset, matched text and base word.
pub fn print_matches<W: Write>(matches: &[FilterMatch], writer: &mut W, supports_color: bool) -> io::Result<()> {
    if matches.is_empty() {
        return writeln!(writer, "{}", paint("clean", supports_color, |s| s.green().to_string()));
    }
    for m in matches {
        writeln!(
            writer,
            "{}\t{}\t({})",
            m.offset,
            paint(&m.word, supports_color, |s| s.red().to_string()),
            m.base_word
        )?;
    }
    Ok(())
}

/// Occurrence counts per base word, in order of first appearance.
pub fn print_summary<W: Write>(
    results: &[SubstitutionResult],
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(writer, "{}", paint("No bad words found.", supports_color, |s| s.green().to_string()));
    }

    let mut counts: Vec<(&str, usize)> = Vec::new();
    for result in results {
        match counts.iter_mut().find(|(word, _)| *word == result.base_word) {
            Some((_, count)) => *count += 1,
            None => counts.push((result.base_word.as_str(), 1)),
        }
    }

    writeln!(writer, "{}", paint("Substitution Summary:", supports_color, |s| s.bold().to_string()))?;
    for (word, count) in counts {
        writeln!(
            writer,
            "  - {} ({} occurrence{})",
            paint(word, supports_color, |s| s.magenta().to_string()),
            count,
            if count == 1 { "" } else { "s" }
        )?;
    }
    Ok(())
}
