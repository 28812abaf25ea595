//! Collapses a working directory and its ancestors into `<CWD>` markers.
//!
//! For a prefix `/home/u/proj` the ladder is:
//!
//! | match prefix    | marker         |
//! |-----------------|----------------|
//! | `/home/u/proj`  | `<CWD>`        |
//! | `/home/u`       | `<CWD>/..`     |
//! | `/home`         | `<CWD>/../..`  |
//!
//! Rungs are applied in that order as literal substring replacements, so the
//! longest prefix always wins over its ancestors.

use log::debug;
use regex::{Captures, Regex};

use crate::errors::UnipathError;
use crate::pass::RewritePass;
use crate::patterns::compiler::compile_pattern;
use crate::patterns::{escape_literal, forward_slashes};

/// Marker substituted for the working directory itself.
pub const CWD_MARKER: &str = "<CWD>";

/// Computes the `(match_prefix, marker)` ladder for a working directory.
///
/// The first rung is always emitted for a non-empty prefix. Each later rung drops
/// the final `/`-delimited segment and is emitted only while the result still
/// contains a `/`.
pub fn cwd_ladder(cwd_path_prefix: &str) -> Vec<(String, String)> {
    let normalized = forward_slashes(cwd_path_prefix);
    let mut prefix = normalized.trim_end_matches('/');
    let mut marker = CWD_MARKER.to_string();
    let mut ladder = Vec::new();

    while !prefix.is_empty() {
        ladder.push((prefix.to_string(), marker.clone()));
        match prefix.rfind('/') {
            Some(slash) => prefix = prefix[..slash].trim_end_matches('/'),
            None => break,
        }
        marker.push_str("/..");
        if !prefix.contains('/') {
            break;
        }
    }
    ladder
}

#[derive(Debug)]
struct Rung {
    pattern: Regex,
    marker: String,
}

/// Replaces the working directory prefix and each ancestor with its marker.
#[derive(Debug)]
pub struct CwdCollapser {
    rungs: Vec<Rung>,
}

impl CwdCollapser {
    /// Builds the collapser, or `None` when the prefix yields no rungs.
    pub fn new(cwd_path_prefix: &str) -> Result<Option<Self>, UnipathError> {
        let ladder = cwd_ladder(cwd_path_prefix);
        if ladder.is_empty() {
            return Ok(None);
        }
        debug!("CWD ladder for '{}' has {} rungs.", cwd_path_prefix, ladder.len());

        let rungs = ladder
            .into_iter()
            .map(|(prefix, marker)| -> Result<Rung, UnipathError> {
                Ok(Rung {
                    pattern: compile_pattern("cwd", &escape_literal(&prefix))?,
                    marker,
                })
            })
            .collect::<Result<Vec<_>, UnipathError>>()?;
        Ok(Some(Self { rungs }))
    }
}

impl RewritePass for CwdCollapser {
    fn name(&self) -> &str {
        "cwd"
    }

    fn apply(&self, text: &str) -> (String, usize) {
        let mut current = text.to_string();
        let mut count = 0usize;
        for rung in &self.rungs {
            current = rung
                .pattern
                .replace_all(&current, |_: &Captures<'_>| {
                    count += 1;
                    rung.marker.as_str()
                })
                .into_owned();
        }
        (current, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ladder(prefix: &str) -> Vec<(String, String)> {
        cwd_ladder(prefix)
    }

    fn pair(prefix: &str, marker: &str) -> (String, String) {
        (prefix.to_string(), marker.to_string())
    }

    #[test]
    fn unix_ladder_stops_at_the_root_segment() {
        assert_eq!(
            ladder("/home/u/proj"),
            vec![
                pair("/home/u/proj", "<CWD>"),
                pair("/home/u", "<CWD>/.."),
                pair("/home", "<CWD>/../.."),
            ]
        );
    }

    #[test]
    fn windows_ladder_is_normalized_and_stops_before_the_drive() {
        assert_eq!(
            ladder(r"C:\Users\me\proj"),
            vec![
                pair("C:/Users/me/proj", "<CWD>"),
                pair("C:/Users/me", "<CWD>/.."),
                pair("C:/Users", "<CWD>/../.."),
            ]
        );
    }

    #[test]
    fn single_segment_and_relative_prefixes() {
        assert_eq!(ladder("proj"), vec![pair("proj", "<CWD>")]);
        assert_eq!(ladder("a/b"), vec![pair("a/b", "<CWD>")]);
    }

    #[test]
    fn trailing_separators_and_empty_prefixes() {
        assert_eq!(ladder("/home/u/"), ladder("/home/u"));
        assert_eq!(
            ladder("/home//u"),
            vec![pair("/home//u", "<CWD>"), pair("/home", "<CWD>/..")]
        );
        assert!(ladder("").is_empty());
        assert!(ladder("/").is_empty());
        assert!(CwdCollapser::new("").unwrap().is_none());
    }

    #[test]
    fn collapses_cwd_and_ancestors() {
        let pass = CwdCollapser::new("/home/u/proj").unwrap().unwrap();
        let (out, count) = pass.apply("at /home/u/proj/index.js and /home/u/other.js");
        assert_eq!(out, "at <CWD>/index.js and <CWD>/../other.js");
        assert_eq!(count, 2);
    }

    #[test]
    fn counts_every_occurrence_of_every_rung() {
        let pass = CwdCollapser::new("/srv/a").unwrap().unwrap();
        let (out, count) = pass.apply("/srv/a/x /srv/a/y /srv/b /srv/c");
        assert_eq!(out, "<CWD>/x <CWD>/y <CWD>/../b <CWD>/../c");
        assert_eq!(count, 4);
    }

    #[test]
    fn prefix_metacharacters_match_literally() {
        let pass = CwdCollapser::new("/srv/app+(v1)/x").unwrap().unwrap();
        let (out, _) = pass.apply("/srv/app+(v1)/x/main.rs /srv/appv1/x");
        assert_eq!(out, "<CWD>/main.rs <CWD>/../../appv1/x");
    }

    #[test]
    fn substring_occurrences_are_replaced_too() {
        let pass = CwdCollapser::new("/home/u/proj").unwrap().unwrap();
        let (out, _) = pass.apply("/homework/notes.txt");
        assert_eq!(out, "<CWD>/../..work/notes.txt");
    }
}
