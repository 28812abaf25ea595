//! Configuration management for `unipath-core`.
//!
//! This module defines the options record accepted by the rewriting pipeline and
//! the alias specs it carries. It handles deserialization from YAML or JSON option
//! files, resolution of alias specs against their defaults, and merging of
//! command-line overrides on top of a loaded file.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::errors::UnipathError;

/// A single caller-supplied alias spec.
///
/// Either a bare identifier (the identifier is also its own replacement) or an
/// `{id, replacement}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AliasSpec {
    Id(String),
    Mapped {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        replacement: Option<String>,
    },
}

/// One alias spec or an ordered sequence of them, as accepted by `reduce_paths`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ReducePaths {
    // `Many` must be tried first: a two-element sequence would otherwise
    // deserialize into `AliasSpec::Mapped`.
    Many(Vec<AliasSpec>),
    One(AliasSpec),
}

/// An alias spec with its defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias {
    pub id: String,
    pub replacement: String,
}

/// The options record for one rewriting call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UnifyOptions {
    /// If true, a backslash followed by `u`, `x`, `w`, `b` or `n` is kept as an escape sequence.
    #[serde(alias = "hasExplicitEscapes")]
    pub has_explicit_escapes: bool,
    /// Working directory collapsed to `<CWD>`; empty disables the pass.
    #[serde(alias = "cwdPathPrefix")]
    pub cwd_path_prefix: String,
    /// Logical path aliases, applied in order.
    #[serde(alias = "reducePaths", skip_serializing_if = "Option::is_none")]
    pub reduce_paths: Option<ReducePaths>,
}

impl AliasSpec {
    /// Applies the defaulting rules. Returns `None` for a spec with an empty id.
    pub fn resolve(&self) -> Option<Alias> {
        let (id, replacement) = match self {
            AliasSpec::Id(id) => (id.as_str(), None),
            AliasSpec::Mapped { id, replacement } => (id.as_str(), replacement.as_deref()),
        };
        if id.is_empty() {
            return None;
        }
        let replacement = match replacement {
            Some(r) if !r.is_empty() => r,
            _ => id,
        };
        Some(Alias {
            id: id.to_string(),
            replacement: replacement.to_string(),
        })
    }
}

impl From<&str> for AliasSpec {
    fn from(id: &str) -> Self {
        AliasSpec::Id(id.to_string())
    }
}

impl From<(&str, &str)> for AliasSpec {
    fn from((id, replacement): (&str, &str)) -> Self {
        AliasSpec::Mapped {
            id: id.to_string(),
            replacement: Some(replacement.to_string()),
        }
    }
}

/// Parses the command-line form `ID` or `ID=REPLACEMENT`.
impl FromStr for AliasSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some(("", _)) => Err(format!("alias spec '{}' has an empty id", s)),
            Some((id, replacement)) => Ok(AliasSpec::from((id, replacement))),
            None if s.is_empty() => Err("alias spec is empty".to_string()),
            None => Ok(AliasSpec::from(s)),
        }
    }
}

impl ReducePaths {
    /// The specs in the order they were supplied.
    pub fn specs(&self) -> &[AliasSpec] {
        match self {
            ReducePaths::Many(specs) => specs,
            ReducePaths::One(spec) => std::slice::from_ref(spec),
        }
    }
}

impl UnifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_explicit_escapes(mut self, enabled: bool) -> Self {
        self.has_explicit_escapes = enabled;
        self
    }

    pub fn with_cwd_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cwd_path_prefix = prefix.into();
        self
    }

    /// Appends an alias spec after any already present.
    pub fn with_alias(mut self, spec: impl Into<AliasSpec>) -> Self {
        let mut specs = self.alias_specs().to_vec();
        specs.push(spec.into());
        self.reduce_paths = Some(ReducePaths::Many(specs));
        self
    }

    pub fn alias_specs(&self) -> &[AliasSpec] {
        match &self.reduce_paths {
            Some(reduce_paths) => reduce_paths.specs(),
            None => &[],
        }
    }

    /// Resolves `reduce_paths` into the ordered alias list, skipping empty specs.
    pub fn aliases(&self) -> Vec<Alias> {
        let specs = self.alias_specs();
        let aliases: Vec<Alias> = specs
            .iter()
            .enumerate()
            .filter_map(|(index, spec)| {
                let alias = spec.resolve();
                if alias.is_none() {
                    warn!("Skipping alias spec #{} because its id is empty.", index);
                }
                alias
            })
            .collect();
        debug!("Resolved {} of {} alias specs.", aliases.len(), specs.len());
        aliases
    }

    /// Loads options from a YAML file, or a JSON file when the extension is `.json`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, UnipathError> {
        let path = path.as_ref();
        info!("Loading options from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(|e| UnipathError::ConfigRead(path.to_path_buf(), e))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let options: UnifyOptions = if is_json {
            serde_json::from_str(&text)
                .map_err(|e| UnipathError::ConfigParse(path.to_path_buf(), e.to_string()))?
        } else if text.trim().is_empty() {
            // serde_yml rejects an empty document; treat it as all defaults.
            UnifyOptions::default()
        } else {
            serde_yml::from_str(&text)
                .map_err(|e| UnipathError::ConfigParse(path.to_path_buf(), e.to_string()))?
        };

        info!(
            "Loaded options from {} ({} alias specs).",
            path.display(),
            options.alias_specs().len()
        );
        Ok(options)
    }
}

/// Merges command-line overrides on top of options loaded from a file.
///
/// Escapes are enabled if either side enables them, a non-empty override prefix
/// replaces the base prefix, and override aliases run after the base aliases.
pub fn merge_options(base: UnifyOptions, overrides: UnifyOptions) -> UnifyOptions {
    debug!(
        "merge_options called. Base aliases: {}, override aliases: {}",
        base.alias_specs().len(),
        overrides.alias_specs().len()
    );

    let cwd_path_prefix = if overrides.cwd_path_prefix.is_empty() {
        base.cwd_path_prefix.clone()
    } else {
        debug!("Overriding CWD prefix with: {}", overrides.cwd_path_prefix);
        overrides.cwd_path_prefix.clone()
    };

    let specs: Vec<AliasSpec> = base
        .alias_specs()
        .iter()
        .chain(overrides.alias_specs())
        .cloned()
        .collect();

    UnifyOptions {
        has_explicit_escapes: base.has_explicit_escapes || overrides.has_explicit_escapes,
        cwd_path_prefix,
        reduce_paths: if specs.is_empty() {
            None
        } else {
            Some(ReducePaths::Many(specs))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_id_is_its_own_replacement() {
        let alias = AliasSpec::from("lib").resolve().unwrap();
        assert_eq!(alias.id, "lib");
        assert_eq!(alias.replacement, "lib");
    }

    #[test]
    fn missing_or_empty_replacement_defaults_to_id() {
        let missing = AliasSpec::Mapped { id: "a".into(), replacement: None };
        let empty = AliasSpec::Mapped { id: "a".into(), replacement: Some(String::new()) };
        assert_eq!(missing.resolve().unwrap().replacement, "a");
        assert_eq!(empty.resolve().unwrap().replacement, "a");
    }

    #[test]
    fn empty_ids_are_skipped() {
        let options = UnifyOptions::new()
            .with_alias("")
            .with_alias(("", "x"))
            .with_alias("keep");
        let aliases = options.aliases();
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases[0].id, "keep");
    }

    #[test]
    fn cli_alias_syntax() {
        assert_eq!("a".parse::<AliasSpec>().unwrap(), AliasSpec::from("a"));
        assert_eq!("a=b".parse::<AliasSpec>().unwrap(), AliasSpec::from(("a", "b")));
        assert_eq!("a=".parse::<AliasSpec>().unwrap().resolve().unwrap().replacement, "a");
        assert!("=b".parse::<AliasSpec>().is_err());
        assert!("".parse::<AliasSpec>().is_err());
    }

    #[test]
    fn reduce_paths_accepts_single_spec_or_sequence() {
        let single: UnifyOptions = serde_json::from_str(r#"{"reducePaths": "node_modules"}"#).unwrap();
        assert_eq!(single.alias_specs(), &[AliasSpec::from("node_modules")]);

        let pair: UnifyOptions =
            serde_json::from_str(r#"{"reduce_paths": {"id": "a", "replacement": "b"}}"#).unwrap();
        assert_eq!(pair.alias_specs(), &[AliasSpec::from(("a", "b"))]);

        let many: UnifyOptions =
            serde_json::from_str(r#"{"reduce_paths": ["x", "y"]}"#).unwrap();
        assert_eq!(many.alias_specs(), &[AliasSpec::from("x"), AliasSpec::from("y")]);
    }

    #[test]
    fn merge_prefers_override_prefix_and_appends_aliases() {
        let base = UnifyOptions::new()
            .with_cwd_path_prefix("/base")
            .with_explicit_escapes(true)
            .with_alias("one");
        let overrides = UnifyOptions::new().with_cwd_path_prefix("/cli").with_alias("two");

        let merged = merge_options(base, overrides);
        assert_eq!(merged.cwd_path_prefix, "/cli");
        assert!(merged.has_explicit_escapes);
        let ids: Vec<String> = merged.aliases().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["one", "two"]);
    }

    #[test]
    fn merge_keeps_base_prefix_when_override_is_empty() {
        let merged = merge_options(UnifyOptions::new().with_cwd_path_prefix("/base"), UnifyOptions::new());
        assert_eq!(merged.cwd_path_prefix, "/base");
        assert!(merged.reduce_paths.is_none());
    }
}
