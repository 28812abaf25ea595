//! Backslash-to-slash conversion, the first pass of the pipeline.

use regex::{Captures, Regex};

use crate::errors::UnipathError;
use crate::pass::RewritePass;
use crate::patterns::compiler::compile_pattern;

/// Characters that turn a preceding backslash into an escape sequence.
pub const ESCAPE_INTRODUCERS: &str = "uxwbn";

/// Converts path backslashes to forward slashes.
///
/// Without explicit escapes every backslash is a separator. With explicit escapes
/// a backslash directly followed by one of [`ESCAPE_INTRODUCERS`] is kept, and a
/// doubled backslash collapses to a single `/`.
#[derive(Debug)]
pub struct EscapeNormalizer {
    explicit_escapes: bool,
    separator: Regex,
}

impl EscapeNormalizer {
    pub fn new(explicit_escapes: bool) -> Result<Self, UnipathError> {
        // A backslash followed by another backslash, or by any character that does
        // not introduce an escape. The follower is captured only when it is not a
        // backslash, because it is not part of the separator and must be kept.
        let pattern = if explicit_escapes {
            format!(r"\\(?:\\|([^{ESCAPE_INTRODUCERS}\\]))")
        } else {
            r"\\".to_string()
        };
        Ok(Self {
            explicit_escapes,
            separator: compile_pattern("escape", &pattern)?,
        })
    }
}

impl RewritePass for EscapeNormalizer {
    fn name(&self) -> &str {
        "escape"
    }

    fn apply(&self, text: &str) -> (String, usize) {
        let mut count = 0usize;
        let out = self.separator.replace_all(text, |caps: &Captures<'_>| {
            count += 1;
            match caps.get(1) {
                Some(follower) if self.explicit_escapes => format!("/{}", follower.as_str()),
                _ => "/".to_string(),
            }
        });
        (out.into_owned(), count)
    }
}
