// profanity/src/lib.rs
//! # profanity CLI
//!
//! Command-line front end for `profanity-core`: `check` reports bad words,
//! `sanitise` rewrites them.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
