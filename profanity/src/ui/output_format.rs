//! Formatting of status messages written to stderr.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Colours `text` with `paint` only when the target supports colour.
pub fn paint<F>(text: &str, supports_color: bool, style: F) -> String
where
    F: FnOnce(&str) -> String,
{
    if supports_color {
        style(text)
    } else {
        text.to_string()
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    writeln!(writer, "{}", paint(msg, supports_color, |s| s.cyan().to_string()))
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    let line = format!("Warning: {}", msg);
    writeln!(writer, "{}", paint(&line, supports_color, |s| s.yellow().to_string()))
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    let line = format!("Error: {}", msg);
    writeln!(writer, "{}", paint(&line, supports_color, |s| s.red().bold().to_string()))
}
