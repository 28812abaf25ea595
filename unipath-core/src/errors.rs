//! errors.rs - Custom error types for the unipath-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `unipath-core` library.
///
/// Rewriting text never fails; only building the patterns for a set of
/// options and loading options from disk can.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UnipathError {
    #[error("Failed to compile pattern for pass '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Failed to read options file {}: {}", .0.display(), .1)]
    ConfigRead(PathBuf, std::io::Error),

    #[error("Failed to parse options file {}: {}", .0.display(), .1)]
    ConfigParse(PathBuf, String),
}
