// File: unipath-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot rewriting without keeping a `Unifier` around.

use std::fmt::Display;

use crate::config::UnifyOptions;
use crate::errors::UnipathError;
use crate::unifier::Unifier;

/// Rewrites every path-like substring of `input` according to `options`.
///
/// This is the primary entry point for single calls. Any `Display` value is
/// accepted and stringified first. Callers rewriting many inputs with the same
/// options should build a [`Unifier`] once instead.
///
/// # Arguments
///
/// * `input` - The text (or value to stringify) to rewrite.
/// * `options` - Escape handling, working directory and aliases.
pub fn unify(input: impl Display, options: &UnifyOptions) -> Result<String, UnipathError> {
    let unifier = Unifier::new(options.clone())?;
    Ok(unifier.unify(&input.to_string()))
}
