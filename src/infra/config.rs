// ============================================================
// Layer 6 — Autodoc Configuration
// ============================================================
// Everything the directive pipeline needs, as one serialisable
// struct. Saved and loaded as pretty JSON, e.g. autodoc.json:
//
//   {
//     "docs_dir": "docs/source",
//     "marker": "[[autodoc]]",
//     "extensions": ["md", "mdx"],
//     "search_path": ["src"],
//     "aliases": [
//       { "rule": "repeat_last_segment", "when_contains": "packaged_modules" },
//       { "rule": "redirect", "from": "datasets.logging", "to": "datasets.utils.logging" }
//     ],
//     "fence_language": "python"
//   }
//
// Missing fields fall back to the defaults above, so a config
// file only needs to name what it changes.
//
// Reference: serde documentation (#[serde(default)])
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::docs::resolver::AliasRule;
use crate::docs::scanner::DEFAULT_MARKER;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutodocConfig {
    /// Root of the documentation tree to rewrite
    pub docs_dir:       PathBuf,
    /// Literal token that starts a directive
    pub marker:         String,
    /// File name suffixes to process, without the dot
    pub extensions:     Vec<String>,
    /// Registry files or directories, searched in order
    pub search_path:    Vec<PathBuf>,
    /// Alternate-container rules tried when a lookup fails
    pub aliases:        Vec<AliasRule>,
    /// Language tag of the fenced block rendered for callables
    pub fence_language: String,
}

impl Default for AutodocConfig {
    fn default() -> Self {
        Self {
            docs_dir:       PathBuf::from("docs/source"),
            marker:         DEFAULT_MARKER.to_string(),
            extensions:     vec!["md".to_string(), "mdx".to_string()],
            search_path:    vec![PathBuf::from("src")],
            aliases:        AliasRule::defaults(),
            fence_language: "python".to_string(),
        }
    }
}

impl AutodocConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read autodoc config '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Cannot parse autodoc config '{}'", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write autodoc config '{}'", path.display()))?;
        tracing::debug!("Saved autodoc config to '{}'", path.display());
        Ok(())
    }

    /// Load `path` if given, otherwise start from the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None    => Ok(Self::default()),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: AutodocConfig =
            serde_json::from_str(r#"{ "docs_dir": "site/docs", "aliases": [] }"#).unwrap();
        assert_eq!(cfg.docs_dir, PathBuf::from("site/docs"));
        assert!(cfg.aliases.is_empty());
        assert_eq!(cfg.marker, "[[autodoc]]");
        assert_eq!(cfg.extensions, vec!["md", "mdx"]);
    }

    #[test]
    fn test_alias_rules_in_json() {
        let cfg: AutodocConfig = serde_json::from_str(
            r#"{ "aliases": [ { "rule": "redirect", "from": "a.b", "to": "a.c.b" } ] }"#,
        )
        .unwrap();
        assert_eq!(
            cfg.aliases,
            vec![AliasRule::Redirect { from: "a.b".to_string(), to: "a.c.b".to_string() }]
        );
    }

    #[test]
    fn test_save_then_load() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("autodoc.json");
        let cfg  = AutodocConfig {
            fence_language: "rust".to_string(),
            ..AutodocConfig::default()
        };
        cfg.save(&path).unwrap();
        assert_eq!(AutodocConfig::load(&path).unwrap(), cfg);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        assert!(AutodocConfig::load_or_default(Some(Path::new("/no/such/autodoc.json"))).is_err());
        assert_eq!(AutodocConfig::load_or_default(None).unwrap(), AutodocConfig::default());
    }
}
