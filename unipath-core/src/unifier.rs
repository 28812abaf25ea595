// unipath-core/src/unifier.rs
//! The rewriting pipeline.
//!
//! A `Unifier` is compiled once from a `UnifyOptions` record and then applied to
//! any number of inputs. It owns the ordered list of passes:
//!
//! 1. `EscapeNormalizer` (always)
//! 2. `CwdCollapser` (when `cwd_path_prefix` yields at least one rung)
//! 3. one `AliasRewriter` per resolved alias, in supplied order
//! 4. `GenericNormalizer` (always)
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::UnifyOptions;
use crate::errors::UnipathError;
use crate::pass::{PassSummary, RewritePass};
use crate::passes::{AliasRewriter, CwdCollapser, EscapeNormalizer, GenericNormalizer};

pub struct Unifier {
    options: UnifyOptions,
    passes: Vec<Box<dyn RewritePass>>,
}

impl std::fmt::Debug for Unifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Unifier")
            .field("options", &self.options)
            .field("passes", &self.pass_names())
            .finish()
    }
}

impl Unifier {
    pub fn new(options: UnifyOptions) -> Result<Self, UnipathError> {
        let mut passes: Vec<Box<dyn RewritePass>> = Vec::new();

        passes.push(Box::new(EscapeNormalizer::new(options.has_explicit_escapes)?));

        if let Some(cwd) = CwdCollapser::new(&options.cwd_path_prefix)? {
            passes.push(Box::new(cwd));
        }

        for alias in options.aliases() {
            passes.push(Box::new(AliasRewriter::new(&alias)?));
        }

        passes.push(Box::new(GenericNormalizer::new()?));

        debug!("Unifier compiled with {} passes.", passes.len());
        Ok(Self { options, passes })
    }

    /// Rewrites every path-like substring of `text`.
    pub fn unify(&self, text: &str) -> String {
        self.passes
            .iter()
            .fold(text.to_string(), |current, pass| pass.apply(&current).0)
    }

    /// Like [`Unifier::unify`], also reporting how many substitutions each pass made.
    pub fn unify_with_summary(&self, text: &str) -> (String, Vec<PassSummary>) {
        let mut current = text.to_string();
        let mut summary = Vec::with_capacity(self.passes.len());

        for pass in &self.passes {
            let (next, rewrites) = pass.apply(&current);
            debug!("Pass '{}' made {} rewrites.", pass.name(), rewrites);
            summary.push(PassSummary {
                pass_name: pass.name().to_string(),
                rewrites,
            });
            current = next;
        }
        (current, summary)
    }

    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|pass| pass.name()).collect()
    }
}
