//! Pattern construction and compilation for bad words.
//!
//! `builder` turns a base word plus the active configuration into typed
//! pattern fragments; `compiler` renders and compiles them into regexes and
//! caches the result per configuration.

pub mod builder;
pub mod compiler;
