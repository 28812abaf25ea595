// unipath-core/src/pass.rs
//! Defines the core RewritePass trait and related data structures.
//!
//! The `RewritePass` trait provides a pluggable interface for the individual
//! stages of the rewriting pipeline (escape normalization, CWD collapsing, alias
//! rewriting, generic normalization). Each stage consumes a full string and
//! produces a full string; the `Unifier` runs them in a fixed order.
//!
//! License: MIT OR APACHE 2.0

/// A single stage of the rewriting pipeline.
///
/// Passes are compiled once from resolved options and hold no mutable state, so a
/// pass may be applied to any number of inputs from any number of threads.
pub trait RewritePass: Send + Sync {
    /// A short, stable name used in logs and summaries (e.g. `"cwd"`, `"alias:lib"`).
    fn name(&self) -> &str;

    /// Rewrites `text`, returning the new text and the number of substitutions made.
    fn apply(&self, text: &str) -> (String, usize);
}

/// Number of substitutions one pass made during a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassSummary {
    pub pass_name: String,
    pub rewrites: usize,
}
