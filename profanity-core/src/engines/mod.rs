// profanity-core/src/engines/mod.rs
//! Concrete implementations of the `FilterEngine` trait.
//!
//! Each engine lives in its own file within this directory.

pub mod regex_engine;
