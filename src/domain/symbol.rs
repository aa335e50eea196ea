// ============================================================
// Layer 3 — Symbol Domain Types
// ============================================================
// A symbol path such as `datasets.load.load_dataset` names a
// container (`datasets.load`) and a leaf (`load_dataset`).
//
// Looking a symbol path up yields a described entity:
//   - kind:      function / method / class / value
//   - doc:       optional documentation text
//   - signature: optional parameter list, e.g. "(path, split=None)"
//
// Only functions and methods count as callables; classes are
// rendered with their documentation alone.
//
// Reference: Rust Book §5 (Structs), §6 (Enums)

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of entity a symbol path resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Method,
    Class,
    #[default]
    Value,
}

impl SymbolKind {
    /// Functions and methods get a synthetic `def` line when rendered
    pub fn is_callable(&self) -> bool {
        matches!(self, SymbolKind::Function | SymbolKind::Method)
    }
}

/// A described entity, as stored in a symbol registry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymbolEntry {
    #[serde(default)]
    pub kind: SymbolKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl SymbolEntry {
    pub fn new(kind: SymbolKind) -> Self {
        Self { kind, doc: None, signature: None }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Trimmed documentation, or None when missing or blank
    pub fn trimmed_doc(&self) -> Option<&str> {
        self.doc.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }

    /// Signature to print after the leaf name; empty parameter list if unknown
    pub fn signature_or_default(&self) -> &str {
        self.signature.as_deref().unwrap_or("()")
    }
}

// ─── SymbolPath ───────────────────────────────────────────────────────────────
/// A dotted symbol path split into container and leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolPath {
    /// Everything before the last dot (may be empty)
    pub container: String,
    /// The last dotted segment
    pub leaf: String,
}

impl SymbolPath {
    /// Split `a.b.C` into container `a.b` and leaf `C`.
    /// A path without dots has an empty container.
    pub fn parse(path: &str) -> Self {
        match path.rsplit_once('.') {
            Some((container, leaf)) => Self {
                container: container.to_string(),
                leaf:      leaf.to_string(),
            },
            None => Self {
                container: String::new(),
                leaf:      path.to_string(),
            },
        }
    }

    /// Last segment of the container path (`a.b` → `b`)
    pub fn container_tail(&self) -> &str {
        self.container
            .rsplit('.')
            .next()
            .unwrap_or(&self.container)
    }
}

impl fmt::Display for SymbolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.container.is_empty() {
            f.write_str(&self.leaf)
        } else {
            write!(f, "{}.{}", self.container, self.leaf)
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_last_dot() {
        let p = SymbolPath::parse("datasets.arrow_dataset.Dataset.map");
        assert_eq!(p.container, "datasets.arrow_dataset.Dataset");
        assert_eq!(p.leaf, "map");
        assert_eq!(p.container_tail(), "Dataset");
        assert_eq!(p.to_string(), "datasets.arrow_dataset.Dataset.map");
    }

    #[test]
    fn test_parse_without_dot() {
        let p = SymbolPath::parse("datasets");
        assert!(p.container.is_empty());
        assert_eq!(p.leaf, "datasets");
    }

    #[test]
    fn test_only_functions_and_methods_are_callable() {
        assert!(SymbolKind::Function.is_callable());
        assert!(SymbolKind::Method.is_callable());
        assert!(!SymbolKind::Class.is_callable());
        assert!(!SymbolKind::Value.is_callable());
    }

    #[test]
    fn test_blank_doc_counts_as_missing() {
        let e = SymbolEntry::new(SymbolKind::Class).with_doc("   \n ");
        assert_eq!(e.trimmed_doc(), None);
        let e = SymbolEntry::new(SymbolKind::Class).with_doc("\n  A class.\n");
        assert_eq!(e.trimmed_doc(), Some("A class."));
    }
}
