//! Rewrites paths running through a logical alias segment.
//!
//! A path such as `C:\work\vendor\lib\util\mod.js` with the alias `{id: "lib",
//! replacement: "@lib"}` becomes `/@lib/util/mod.js`: everything in front of the
//! aliased segment is dropped, the segment is replaced and the tail is
//! slash-normalized.

use regex::Captures;

use crate::config::Alias;
use crate::errors::UnipathError;
use crate::pass::RewritePass;
use crate::patterns::compiler::PathPattern;
use crate::patterns::{alias_pattern, forward_slashes, retained_scheme, BOUNDARY_GROUP, SCHEME_GROUP};

const TAIL_GROUP: usize = 4;

#[derive(Debug)]
pub struct AliasRewriter {
    name: String,
    replacement: String,
    pattern: PathPattern,
}

impl AliasRewriter {
    pub fn new(alias: &Alias) -> Result<Self, UnipathError> {
        let name = format!("alias:{}", alias.id);
        let pattern = PathPattern::new(&name, &alias_pattern(&alias.id))?;
        Ok(Self {
            name,
            replacement: alias.replacement.clone(),
            pattern,
        })
    }

    fn rewrite(&self, caps: &Captures<'_>) -> String {
        let boundary = caps.get(BOUNDARY_GROUP).map_or("", |m| m.as_str());
        let scheme = retained_scheme(caps.get(SCHEME_GROUP).map(|m| m.as_str()));
        let tail = caps.get(TAIL_GROUP).map_or("", |m| m.as_str());
        format!(
            "{}{}/{}/{}",
            boundary,
            scheme,
            self.replacement,
            forward_slashes(tail)
        )
    }
}

impl RewritePass for AliasRewriter {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, text: &str) -> (String, usize) {
        self.pattern.replace_all(text, |caps| self.rewrite(caps))
    }
}
