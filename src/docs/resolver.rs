// ============================================================
// Layer 4b — Directive Resolver
// ============================================================
// Turns a symbol path into the text that replaces its directive.
//
// Resolution steps for `a.b.Leaf`:
//   1. Split into container `a.b` and leaf `Leaf`
//   2. Ask the SymbolSource for `Leaf` in `a.b`
//   3. On a not-found failure, try each applicable alias rule's
//      alternate container, in table order
//   4. Render:
//        callable + doc  → fenced `def Leaf(sig):` block, blank line, doc
//        other + doc     → doc
//        no/blank doc    → "No docstring found for a.b.Leaf"
//        not found       → "<marker> a.b.Leaf: Could not import a.b.Leaf"
//        other failure   → "<marker> a.b.Leaf: <message>"
//
// Resolution never fails: every outcome renders to some text,
// so a document is always fully rewritten.
//
// Reference: Rust Book §6 (Enums), §9 (Recoverable Errors)

use serde::{Deserialize, Serialize};

use crate::domain::symbol::{SymbolEntry, SymbolPath};
use crate::domain::traits::{LookupError, SymbolSource};

// ─── Alias table ──────────────────────────────────────────────────────────────
/// A named special case that proposes an alternate container path
/// when the original one cannot be found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum AliasRule {
    /// `x.y.name` → `x.y.name.name`, for containers whose path contains `when_contains`.
    /// Covers packages whose public module re-uses the package name.
    RepeatLastSegment { when_contains: String },

    /// Exact container rename, e.g. `datasets.logging` → `datasets.utils.logging`
    Redirect { from: String, to: String },
}

impl AliasRule {
    /// The stock table for the `datasets` documentation sources
    pub fn defaults() -> Vec<AliasRule> {
        vec![
            AliasRule::RepeatLastSegment {
                when_contains: "packaged_modules".to_string(),
            },
            AliasRule::Redirect {
                from: "datasets.logging".to_string(),
                to:   "datasets.utils.logging".to_string(),
            },
        ]
    }

    /// Alternate container for `path`, or None if this rule does not apply
    pub fn alternate(&self, path: &SymbolPath) -> Option<String> {
        match self {
            AliasRule::RepeatLastSegment { when_contains } => {
                if path.container.is_empty() || !path.container.contains(when_contains.as_str()) {
                    return None;
                }
                Some(format!("{}.{}", path.container, path.container_tail()))
            }
            AliasRule::Redirect { from, to } => {
                (path.container == *from).then(|| to.clone())
            }
        }
    }
}

// ─── Resolution ───────────────────────────────────────────────────────────────
/// Outcome of resolving one symbol path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Documentation found and rendered
    Documented(String),
    /// The symbol exists but has no (or only blank) documentation
    NoDocumentation,
    /// Container or leaf not found, even after alias rules
    NotFound,
    /// Any other failure, with its message
    Failed(String),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Documented(_))
    }
}

/// Resolves symbol paths against a SymbolSource.
pub struct DirectiveResolver<'s, S: SymbolSource> {
    source:         &'s S,
    marker:         String,
    aliases:        Vec<AliasRule>,
    fence_language: String,
}

impl<'s, S: SymbolSource> DirectiveResolver<'s, S> {
    pub fn new(source: &'s S, marker: impl Into<String>) -> Self {
        Self {
            source,
            marker:         marker.into(),
            aliases:        AliasRule::defaults(),
            fence_language: "python".to_string(),
        }
    }

    pub fn with_aliases(mut self, aliases: Vec<AliasRule>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_fence_language(mut self, language: impl Into<String>) -> Self {
        self.fence_language = language.into();
        self
    }

    /// Resolve `path` to an outcome
    pub fn resolve(&self, path: &str) -> Resolution {
        let symbol = SymbolPath::parse(path);

        match self.locate(&symbol) {
            Ok(entry)                  => self.render_entry(&symbol, &entry),
            Err(e) if e.is_not_found() => Resolution::NotFound,
            Err(e)                     => Resolution::Failed(e.to_string()),
        }
    }

    /// Replacement text for an outcome of `path`
    pub fn render(&self, path: &str, resolution: &Resolution) -> String {
        match resolution {
            Resolution::Documented(text) => text.clone(),
            Resolution::NoDocumentation  => format!("No docstring found for {path}"),
            Resolution::NotFound         => {
                format!("{} {path}: Could not import {path}", self.marker)
            }
            Resolution::Failed(message)  => format!("{} {path}: {message}", self.marker),
        }
    }

    /// Look the symbol up directly, then through the alias table
    fn locate(&self, symbol: &SymbolPath) -> Result<SymbolEntry, LookupError> {
        if symbol.container.is_empty() {
            return Err(LookupError::InvalidPath(format!(
                "'{symbol}' has no container path"
            )));
        }

        let first_err = match self.source.lookup(&symbol.container, &symbol.leaf) {
            Ok(entry)                  => return Ok(entry),
            Err(e) if e.is_not_found() => e,
            Err(e)                     => return Err(e),
        };

        for rule in &self.aliases {
            let Some(alternate) = rule.alternate(symbol) else { continue };
            tracing::debug!("Retrying '{}' in alias container '{}'", symbol, alternate);

            match self.source.lookup(&alternate, &symbol.leaf) {
                Ok(entry)                  => return Ok(entry),
                Err(e) if e.is_not_found() => continue,
                Err(e)                     => return Err(e),
            }
        }

        Err(first_err)
    }

    fn render_entry(&self, symbol: &SymbolPath, entry: &SymbolEntry) -> Resolution {
        let Some(doc) = entry.trimmed_doc() else {
            return Resolution::NoDocumentation;
        };

        if entry.kind.is_callable() {
            Resolution::Documented(format!(
                "```{}\ndef {}{}:\n```\n\n{}",
                self.fence_language,
                symbol.leaf,
                entry.signature_or_default(),
                doc
            ))
        } else {
            Resolution::Documented(doc.to_string())
        }
    }
}
