//! Catch-all slash normalization for absolute-looking paths.

use regex::Captures;

use crate::errors::UnipathError;
use crate::pass::RewritePass;
use crate::patterns::compiler::PathPattern;
use crate::patterns::{
    forward_slashes, generic_pattern, retained_scheme, BOUNDARY_GROUP, SCHEME_GROUP,
};

const SEGMENT_GROUP: usize = 3;
const TAIL_GROUP: usize = 4;

/// Normalizes every remaining path of the form `[scheme:]\segment\tail`.
///
/// Drive letters are dropped, longer scheme tokens are kept and URL schemes are
/// never matched.
#[derive(Debug)]
pub struct GenericNormalizer {
    pattern: PathPattern,
}

impl GenericNormalizer {
    pub fn new() -> Result<Self, UnipathError> {
        Ok(Self {
            pattern: PathPattern::new("generic", &generic_pattern())?,
        })
    }
}

fn rewrite(caps: &Captures<'_>) -> String {
    let group = |index: usize| caps.get(index).map_or("", |m| m.as_str());
    format!(
        "{}{}{}{}",
        group(BOUNDARY_GROUP),
        retained_scheme(caps.get(SCHEME_GROUP).map(|m| m.as_str())),
        forward_slashes(group(SEGMENT_GROUP)),
        forward_slashes(group(TAIL_GROUP))
    )
}

impl RewritePass for GenericNormalizer {
    fn name(&self) -> &str {
        "generic"
    }

    fn apply(&self, text: &str) -> (String, usize) {
        self.pattern.replace_all(text, rewrite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        GenericNormalizer::new().unwrap().apply(input).0
    }

    #[test]
    fn normalizes_absolute_windows_paths() {
        assert_eq!(run(r"\absolute\windows\path\file.ext"), "/absolute/windows/path/file.ext");
        assert_eq!(run(r"D:\absolute\windows\path\file.ext"), "/absolute/windows/path/file.ext");
        assert_eq!(run(r"D:/absolute/windows/path/file.ext"), "/absolute/windows/path/file.ext");
    }

    #[test]
    fn keeps_long_scheme_tokens() {
        assert_eq!(run(r"Waterloo:\share\dir\f.txt"), "Waterloo:/share/dir/f.txt");
        assert_eq!(run(r"wow! Another:\none/hits/the/dust"), "wow! Another:/none/hits/the/dust");
    }

    #[test]
    fn leaves_urls_and_relative_paths_alone() {
        for input in [
            "http://example.com/",
            "http://bugger.com/foo/bar/do.html",
            "sftp://host/a/b/c",
            "relative/unix/path/file.ext",
            r"relative\windows\path",
        ] {
            assert_eq!(run(input), input);
        }
    }

    #[test]
    fn requires_a_separator_after_the_first_segment() {
        assert_eq!(run(r"wow! Another:\none hits the dust"), r"wow! Another:\none hits the dust");
    }

    #[test]
    fn rewrites_paths_inside_prose() {
        let (out, count) = GenericNormalizer::new()
            .unwrap()
            .apply(r"open C:\tmp\a.txt then \var\log\b.log");
        assert_eq!(out, "open /tmp/a.txt then /var/log/b.log");
        assert_eq!(count, 2);
    }
}
