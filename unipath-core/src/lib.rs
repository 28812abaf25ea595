// unipath-core/src/lib.rs
//! # unipath Core Library
//!
//! `unipath-core` rewrites filesystem-path-like substrings embedded in free text
//! (stack traces, log lines, error dumps) so the text reads the same on every
//! platform and, optionally, relative to a known working directory or to
//! logical path aliases supplied by the caller.
//!
//! The library is pure and stateless: it never touches the filesystem and never
//! checks that a matched substring is a real path. A call takes text and options
//! and returns text.
//!
//! ## Pipeline
//!
//! Passes run in a fixed order, each consuming and producing a full string:
//!
//! 1. **Escape normalizer**: backslashes become forward slashes, except recognized
//!    escape sequences when `has_explicit_escapes` is set.
//! 2. **CWD collapser**: the working directory becomes `<CWD>`, its parent
//!    `<CWD>/..`, its grandparent `<CWD>/../..`, and so on.
//! 3. **Alias rewriter**: for each alias, a path running through the aliased
//!    segment becomes `/<replacement>/<tail>`.
//! 4. **Generic normalizer**: any remaining absolute-looking path is
//!    slash-normalized and loses its drive letter. URLs are left untouched.
//!
//! ## Modules
//!
//! * `config`: `UnifyOptions`, alias specs, option files and merging.
//! * `pass`: the `RewritePass` trait implemented by every pass.
//! * `passes`: the four concrete passes.
//! * `patterns`: shared pattern fragments, literal escaping and the pattern compiler.
//! * `unifier`: the compiled pipeline.
//! * `headless`: the one-shot `unify` function.
//! * `errors`: `UnipathError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use unipath_core::{unify, UnifyOptions, UnipathError};
//!
//! fn main() -> Result<(), UnipathError> {
//!     let trace = "at main (/home/u/proj/src/index.js:3:9)\nat C:\\tools\\lib\\run.js:1:1";
//!     let options = UnifyOptions::new()
//!         .with_cwd_path_prefix("/home/u/proj")
//!         .with_alias("lib");
//!
//!     let output = unify(trace, &options)?;
//!     assert_eq!(output, "at main (<CWD>/src/index.js:3:9)\nat /lib/run.js:1:1");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Rewriting itself cannot fail. Building the patterns for a set of options and
//! loading options from disk return [`UnipathError`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod headless;
pub mod pass;
pub mod passes;
pub mod patterns;
pub mod unifier;

/// Re-exports the options record and alias types.
pub use config::{merge_options, Alias, AliasSpec, ReducePaths, UnifyOptions};

/// Re-exports the custom error type for clear error reporting.
pub use errors::UnipathError;

/// Re-exports the pass trait and its per-call summary.
pub use pass::{PassSummary, RewritePass};

/// Re-exports the concrete passes for callers assembling their own pipelines.
pub use passes::{cwd_ladder, AliasRewriter, CwdCollapser, EscapeNormalizer, GenericNormalizer, CWD_MARKER};

/// Re-exports the pipeline and the one-shot entry point.
pub use headless::unify;
pub use unifier::Unifier;
