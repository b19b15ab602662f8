//! Terminal output helpers: message formatting, match summaries and diffs.

pub mod diff_viewer;
pub mod output_format;
pub mod summary;
