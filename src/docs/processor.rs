// ============================================================
// Layer 4b — Document Processor
// ============================================================
// One pass over one document:
//
//   1. Substitute — replace every directive span, left to right
//   2. Resolve    — each distinct symbol path on first sight
//   3. Persist    — write the result back to the same path (UTF-8)
//
// Identical directives resolve identically, so later occurrences
// reuse the text of the first. Substitution only
// touches matched spans, so a directive that is a prefix of a
// longer one (`x.Y` vs `x.YZ`) cannot clobber it.
//
// A document without directives is written back unchanged, which
// makes a second run over fully resolved documents a no-op.

use anyhow::{Context, Result};
use std::{collections::HashMap, fs, path::Path};

use crate::docs::resolver::{DirectiveResolver, Resolution};
use crate::docs::scanner::DirectiveScanner;
use crate::domain::traits::SymbolSource;

/// Directive counts for one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentReport {
    /// Directive occurrences replaced by documentation
    pub resolved:   usize,
    /// Directive occurrences replaced by a placeholder
    pub unresolved: usize,
}

impl DocumentReport {
    pub fn directives(&self) -> usize {
        self.resolved + self.unresolved
    }
}

pub struct DocumentProcessor<'s, S: SymbolSource> {
    scanner:  DirectiveScanner,
    resolver: DirectiveResolver<'s, S>,
}

impl<'s, S: SymbolSource> DocumentProcessor<'s, S> {
    pub fn new(scanner: DirectiveScanner, resolver: DirectiveResolver<'s, S>) -> Self {
        Self { scanner, resolver }
    }

    /// Rewrite `text` in memory; returns the new text and its counts
    pub fn rewrite(&self, text: &str) -> (String, DocumentReport) {
        let mut resolved: HashMap<String, (String, bool)> = HashMap::new();
        let mut report = DocumentReport::default();

        let out = self.scanner.substitute(text, |path| {
            let (rendered, ok) = resolved.entry(path.to_string()).or_insert_with(|| {
                let outcome = self.resolver.resolve(path);
                if let Resolution::NotFound | Resolution::Failed(_) = outcome {
                    tracing::warn!("Unresolved directive for '{}'", path);
                }
                (self.resolver.render(path, &outcome), outcome.is_resolved())
            });
            if *ok { report.resolved += 1 } else { report.unresolved += 1 }
            rendered.clone()
        });

        (out.into_owned(), report)
    }

    /// Read, rewrite and write back one file
    pub fn process_file(&self, path: &Path) -> Result<DocumentReport> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        let (rewritten, report) = self.rewrite(&content);

        fs::write(path, rewritten)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!(
            "{}: {} directives ({} unresolved)",
            path.display(),
            report.directives(),
            report.unresolved
        );
        Ok(report)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::scanner::DEFAULT_MARKER;
    use crate::domain::symbol::{SymbolEntry, SymbolKind};
    use crate::domain::traits::LookupError;

    /// Knows exactly one symbol: `pkg.mod.Thing`
    struct OneSymbol;

    impl SymbolSource for OneSymbol {
        fn lookup(&self, container: &str, leaf: &str) -> Result<SymbolEntry, LookupError> {
            match (container, leaf) {
                ("pkg.mod", "Thing") => {
                    Ok(SymbolEntry::new(SymbolKind::Class).with_doc("Thing docs."))
                }
                ("pkg.mod", _) => Err(LookupError::AttributeNotFound {
                    container: container.to_string(),
                    leaf:      leaf.to_string(),
                }),
                _ => Err(LookupError::ContainerNotFound(container.to_string())),
            }
        }
    }

    fn processor(src: &OneSymbol) -> DocumentProcessor<'_, OneSymbol> {
        DocumentProcessor::new(
            DirectiveScanner::new(DEFAULT_MARKER).unwrap(),
            DirectiveResolver::new(src, DEFAULT_MARKER),
        )
    }

    #[test]
    fn test_rewrite_replaces_every_occurrence() {
        let src = OneSymbol;
        let p   = processor(&src);
        let (out, report) =
            p.rewrite("# A\n[[autodoc]] pkg.mod.Thing\n\nand again [[autodoc]] pkg.mod.Thing\n");
        assert_eq!(out, "# A\nThing docs.\n\nand again Thing docs.\n");
        assert_eq!(report, DocumentReport { resolved: 2, unresolved: 0 });
    }

    #[test]
    fn test_unresolved_directive_leaves_rest_untouched() {
        let src  = OneSymbol;
        let p    = processor(&src);
        let text = "intro\n[[autodoc]] foo.bar.Baz\noutro";
        let (out, report) = p.rewrite(text);

        assert_eq!(out, "intro\n[[autodoc]] foo.bar.Baz: Could not import foo.bar.Baz\noutro");
        assert_eq!(report.unresolved, 1);
    }

    #[test]
    fn test_counts_follow_each_occurrence_outcome() {
        let src = OneSymbol;
        let p   = processor(&src);
        let (_, report) = p.rewrite(
            "[[autodoc]] pkg.mod.Thing [[autodoc]] foo.Bar [[autodoc]] pkg.mod.Thing [[autodoc]] foo.Bar",
        );
        assert_eq!(report, DocumentReport { resolved: 2, unresolved: 2 });
    }

    #[test]
    fn test_prefix_directive_does_not_clobber_longer_one() {
        let src = OneSymbol;
        let p   = processor(&src);
        let (out, _) = p.rewrite("[[autodoc]] pkg.mod.Thing [[autodoc]] pkg.mod.ThingTwo");
        assert_eq!(
            out,
            "Thing docs. [[autodoc]] pkg.mod.ThingTwo: Could not import pkg.mod.ThingTwo"
        );
    }

    #[test]
    fn test_second_pass_is_noop_on_resolved_document() {
        let src = OneSymbol;
        let p   = processor(&src);
        let (first, _)       = p.rewrite("x [[autodoc]] pkg.mod.Thing y");
        let (second, report) = p.rewrite(&first);
        assert_eq!(first, second);
        assert_eq!(report.directives(), 0);
    }

    #[test]
    fn test_process_file_writes_in_place() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.md");
        fs::write(&path, "Über [[autodoc]] pkg.mod.Thing\n").unwrap();

        let src    = OneSymbol;
        let report = processor(&src).process_file(&path).unwrap();
        assert_eq!(report.resolved, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Über Thing docs.\n");
    }

    #[test]
    fn test_process_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let src = OneSymbol;
        assert!(processor(&src).process_file(&dir.path().join("nope.md")).is_err());
    }
}
