//! Unified diff of the original and sanitised text.
//!
//! Removed lines are shown in red and added lines in green.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::output_format::paint;

pub fn print_diff<W: Write>(
    original: &str,
    sanitised: &str,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let patch = create_patch(original, sanitised);
    writeln!(writer, "{}", paint("--- Diff View ---", supports_color, |s| s.yellow().bold().to_string()))?;

    let mut changed = false;
    for hunk in patch.hunks() {
        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => {
                    changed = true;
                    write_line(writer, &format!("-{}", s), supports_color, |t| t.red().to_string())?;
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    write_line(writer, &format!("+{}", s), supports_color, |t| t.green().to_string())?;
                }
                DiffLine::Context(s) => write_line(writer, &format!(" {}", s), false, |t| t.to_string())?,
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes detected.")?;
    }
    writeln!(writer, "{}", paint("-----------------", supports_color, |s| s.yellow().bold().to_string()))
}

fn write_line<W, F>(writer: &mut W, line: &str, supports_color: bool, style: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce(&str) -> String,
{
    let body = line.strip_suffix('\n').unwrap_or(line);
    writeln!(writer, "{}", paint(body, supports_color, style))
}
