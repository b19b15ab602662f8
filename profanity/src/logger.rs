// profanity/src/logger.rs
//! Logger setup for the CLI, backed by `env_logger`.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `level` overrides `RUST_LOG` when given. Safe to call more than once;
/// later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.format_timestamp(None).try_init();
}
