//! Pattern text shared by the rewrite passes.
//!
//! The alias rewriter and the generic normalizer recognize the same outer shape:
//! a boundary, an optional `word:` scheme token, then separators and segments.
//! The fragments here keep both patterns in step, and `compiler` turns them into
//! matchers that also enforce the URL-scheme exclusion.
//!
//! Identifier characters are ASCII only (`[A-Za-z0-9_]`).

pub mod compiler;

/// Start of text, or one character that cannot continue an identifier, a path or a scheme.
pub const BOUNDARY: &str = r"(^|[^A-Za-z0-9_\\/:])";

/// Optional `word:` token in front of a path: a drive letter, a network name or a URL scheme.
pub const SCHEME: &str = r"([A-Za-z0-9_]+:)?";

/// Scheme words that introduce a URL. A scheme starting with any of these is never a path.
pub const URL_SCHEME_PREFIXES: &[&str] = &["http", "ftp", "sftp", "uri"];

/// Capture group holding the boundary character.
pub const BOUNDARY_GROUP: usize = 1;
/// Capture group holding the scheme token.
pub const SCHEME_GROUP: usize = 2;

/// Builds the pattern for any absolute-looking path: one leading segment between
/// separators (group 3) and the rest of the path (group 4).
pub fn generic_pattern() -> String {
    format!(r"{BOUNDARY}{SCHEME}([\\/]+[A-Za-z0-9_-]+[\\/]+)([A-Za-z0-9_\\/-]+)")
}

/// Escapes every regex metacharacter in `literal` so it matches itself.
pub fn escape_literal(literal: &str) -> String {
    regex::escape(literal)
}

/// Builds the pattern for one alias id.
///
/// Group 3 is the run of leading segments in front of the id (discarded on rewrite),
/// group 4 is the tail after it.
pub fn alias_pattern(id: &str) -> String {
    format!(
        r"{BOUNDARY}{SCHEME}[\\/]+([A-Za-z0-9_\\/-]+?[\\/]+)?{}[\\/]+([A-Za-z0-9_\\/-]+)",
        escape_literal(id)
    )
}

/// True when a scheme token (with or without its trailing colon) names a URL.
pub fn is_url_scheme(scheme: &str) -> bool {
    URL_SCHEME_PREFIXES
        .iter()
        .any(|prefix| scheme.starts_with(prefix))
}

/// The part of a scheme token that survives a rewrite.
///
/// Tokens of two characters or fewer are drive letters (`C:`) and are dropped;
/// longer ones (`Waterloo:`) name a network location and are kept.
pub fn retained_scheme(scheme: Option<&str>) -> &str {
    match scheme {
        Some(s) if s.len() > 2 => s,
        _ => "",
    }
}

/// Turns every backslash into a forward slash.
pub fn forward_slashes(text: &str) -> String {
    text.replace('\\', "/")
}
