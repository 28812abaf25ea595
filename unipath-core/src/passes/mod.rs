// unipath-core/src/passes/mod.rs
//! The concrete rewrite passes, in pipeline order.
//!
//! Each pass is a separate file within this directory and implements the
//! `RewritePass` trait. The `Unifier` decides which passes a given set of
//! options needs and runs them in the order declared here.
//!
//! License: MIT OR APACHE 2.0

pub mod escape;
pub mod cwd;
pub mod alias;
pub mod generic;

pub use alias::AliasRewriter;
pub use cwd::{cwd_ladder, CwdCollapser, CWD_MARKER};
pub use escape::EscapeNormalizer;
pub use generic::GenericNormalizer;
