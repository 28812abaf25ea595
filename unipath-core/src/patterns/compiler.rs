//! compiler.rs - Compiles pass patterns and applies path-shaped rewrites.
//!
//! Every regular expression used by the pipeline goes through `compile_pattern`,
//! so size limits and error reporting are uniform. `PathPattern` wraps the
//! patterns built from the fragments in `patterns` and owns the scan loop that
//! rejects URL schemes.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Captures, Regex, RegexBuilder};

use super::{is_url_scheme, SCHEME_GROUP};
use crate::errors::UnipathError;

/// Upper bound on the compiled size of a single pattern.
pub const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Compiles `pattern` on behalf of the pass named `pass_name`.
pub fn compile_pattern(pass_name: &str, pattern: &str) -> Result<Regex, UnipathError> {
    debug!(
        "Attempting to compile pattern for pass '{}': '{}'",
        pass_name, pattern
    );
    let regex = RegexBuilder::new(pattern)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|e| UnipathError::PatternCompilation(pass_name.to_string(), e))?;
    log::debug!(
        target: "unipath_core::compiler",
        "Pattern for pass '{}' compiled successfully.",
        pass_name
    );
    Ok(regex)
}

/// A compiled path-shaped pattern (boundary, optional scheme, path groups).
#[derive(Debug)]
pub struct PathPattern {
    regex: Regex,
}

impl PathPattern {
    pub fn new(pass_name: &str, pattern: &str) -> Result<Self, UnipathError> {
        Ok(Self {
            regex: compile_pattern(pass_name, pattern)?,
        })
    }

    /// Replaces every match in `text` with the output of `rewrite`.
    ///
    /// A candidate whose scheme token names a URL is not a match at that position;
    /// scanning resumes one character further on. Returns the new text and the
    /// number of replacements.
    pub fn replace_all<F>(&self, text: &str, mut rewrite: F) -> (String, usize)
    where
        F: FnMut(&Captures<'_>) -> String,
    {
        let mut out = String::with_capacity(text.len());
        let mut last_end = 0usize;
        let mut search_from = 0usize;
        let mut count = 0usize;

        while search_from <= text.len() {
            let Some(caps) = self.regex.captures_at(text, search_from) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };

            if caps
                .get(SCHEME_GROUP)
                .is_some_and(|scheme| is_url_scheme(scheme.as_str()))
            {
                search_from = next_char_boundary(text, whole.start());
                continue;
            }

            out.push_str(&text[last_end..whole.start()]);
            out.push_str(&rewrite(&caps));
            last_end = whole.end();
            count += 1;
            search_from = if whole.start() == whole.end() {
                next_char_boundary(text, whole.end())
            } else {
                whole.end()
            };
        }

        out.push_str(&text[last_end..]);
        (out, count)
    }
}

/// Byte offset of the character after the one starting at `index`, or past the end.
fn next_char_boundary(text: &str, index: usize) -> usize {
    text[index..]
        .chars()
        .next()
        .map_or(text.len() + 1, |c| index + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::generic_pattern;

    #[test]
    fn compile_errors_name_the_pass() {
        let err = compile_pattern("broken", "(unclosed").unwrap_err();
        match err {
            UnipathError::PatternCompilation(name, _) => assert_eq!(name, "broken"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn url_scheme_candidates_are_skipped() {
        let pattern = PathPattern::new("generic", &generic_pattern()).unwrap();
        let (out, count) = pattern.replace_all("see https://a/b/c here", |_| "X".to_string());
        assert_eq!(out, "see https://a/b/c here");
        assert_eq!(count, 0);
    }

    #[test]
    fn every_non_url_match_is_rewritten() {
        let pattern = PathPattern::new("generic", &generic_pattern()).unwrap();
        let (out, count) = pattern.replace_all("a /x/y b /z/w", |caps| {
            format!("{}[{}]", &caps[1], &caps[4])
        });
        assert_eq!(out, "a [y] b [w]");
        assert_eq!(count, 2);
    }

    #[test]
    fn handles_multibyte_text_around_matches() {
        let pattern = PathPattern::new("generic", &generic_pattern()).unwrap();
        let (out, _) = pattern.replace_all("é http://q/r/s ü /p/q", |caps| {
            format!("{}<{}>", &caps[1], &caps[4])
        });
        assert_eq!(out, "é http://q/r/s ü <q>");
    }
}
