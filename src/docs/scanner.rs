// ============================================================
// Layer 4b — Directive Scanner
// ============================================================
// A directive is the marker token, at least one whitespace
// character, then a contiguous run of non-whitespace characters:
//
//   [[autodoc]] datasets.Dataset
//   └── marker ┘ └ symbol path ┘
//
// The marker is matched literally (regex::escape), so markers
// with brackets or dots need no special handling by callers.
//
// Reference: regex crate documentation (Captures, replace_all)

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::{borrow::Cow, ops::Range};

/// Marker used by the stock documentation sources
pub const DEFAULT_MARKER: &str = "[[autodoc]]";

/// One directive found in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Byte range of the whole directive in the scanned text
    pub span: Range<usize>,
    /// The exact matched text, marker included
    pub text: String,
    /// The captured symbol path
    pub path: String,
}

pub struct DirectiveScanner {
    pattern: Regex,
}

impl DirectiveScanner {
    pub fn new(marker: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(r"{}\s+(\S+)", regex::escape(marker)))
            .with_context(|| format!("Cannot build directive pattern for marker '{marker}'"))?;
        Ok(Self { pattern })
    }

    /// All directives in `text`, in document order
    pub fn scan(&self, text: &str) -> Vec<Directive> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let path  = caps.get(1)?;
                Some(Directive {
                    span: whole.range(),
                    text: whole.as_str().to_string(),
                    path: path.as_str().to_string(),
                })
            })
            .collect()
    }

    /// Replace each directive span with `replace(symbol_path)`.
    ///
    /// Substitution is a single left-to-right pass over the original
    /// text: only matched spans change, and replacement text is never
    /// rescanned. Returns a borrowed Cow when nothing matched.
    pub fn substitute<'t, F>(&self, text: &'t str, mut replace: F) -> Cow<'t, str>
    where
        F: FnMut(&str) -> String,
    {
        self.pattern
            .replace_all(text, |caps: &Captures| replace(&caps[1]))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> DirectiveScanner {
        DirectiveScanner::new(DEFAULT_MARKER).unwrap()
    }

    #[test]
    fn test_scan_finds_directives_in_order() {
        let s    = scanner();
        let text = "# API\n\n[[autodoc]] datasets.Dataset\n\ntext\n[[autodoc]]\tdatasets.load.load_dataset\n";
        let found = s.scan(text);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].path, "datasets.Dataset");
        assert_eq!(found[0].text, "[[autodoc]] datasets.Dataset");
        assert_eq!(&text[found[0].span.clone()], found[0].text);
        assert_eq!(found[1].path, "datasets.load.load_dataset");
    }

    #[test]
    fn test_marker_without_path_is_not_a_directive() {
        let s = scanner();
        assert!(s.scan("[[autodoc]]").is_empty());
        assert!(s.scan("[[autodoc]]   ").is_empty());
        assert!(s.scan("[[autodoc]]datasets.Dataset").is_empty());
    }

    #[test]
    fn test_path_may_span_a_newline_gap() {
        // \s+ also matches a line break between marker and path
        let s = scanner();
        let found = s.scan("[[autodoc]]\n  datasets.Features rest");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "datasets.Features");
    }

    #[test]
    fn test_custom_marker_is_literal() {
        let s = DirectiveScanner::new("::doc.").unwrap();
        let found = s.scan("::doc. a.b ::docX c.d");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path, "a.b");
    }

    #[test]
    fn test_substitute_only_touches_spans() {
        let s   = scanner();
        let out = s.substitute("a [[autodoc]] x.Y b", |path| format!("<{path}>"));
        assert_eq!(out, "a <x.Y> b");
    }

    #[test]
    fn test_substitute_without_matches_borrows() {
        let s = scanner();
        assert!(matches!(s.substitute("plain text", |_| String::new()), Cow::Borrowed(_)));
    }
}
