// ============================================================
// Layer 4b — Documentation Tree Walker
// ============================================================
// Visits every file under a root directory, descending into all
// sub-directories, and hands each file whose name ends in one of
// the configured extensions to the DocumentProcessor.
//
// Failure containment:
//   - a file that cannot be read, written or processed is logged
//     and counted, and the walk moves on to the next file
//   - an unreadable directory entry is logged and skipped
//
// ignore's standard filters are switched off: hidden files and
// .gitignore'd paths are documentation like any other. Entries
// are sorted by file name so runs are reproducible. Symlinked
// directories are not descended into, but a symlink to a file is
// processed like the file itself.
//
// Reference: ignore crate documentation (WalkBuilder)

use ignore::WalkBuilder;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::docs::processor::DocumentProcessor;
use crate::domain::traits::SymbolSource;

/// Totals for one walk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    pub documents_processed:   usize,
    pub documents_failed:      usize,
    pub directives_resolved:   usize,
    pub directives_unresolved: usize,
}

/// True if the file name ends in `.<ext>` for one of `extensions`
pub fn has_doc_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|ext| name.ends_with(&format!(".{}", ext.trim_start_matches('.'))))
}

/// All matching document paths under `root`, in walk order
pub fn find_documents(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under '{}': {}", root.display(), e);
                None
            }
        })
        .map(|entry| entry.into_path())
        .filter(|path| has_doc_extension(path, extensions))
        // follows symlinks, unlike the entry's own file type
        .filter(|path| path.is_file())
        .collect()
}

/// Process every matching document under `root`.
pub fn process_directory<S: SymbolSource>(
    root:       &Path,
    extensions: &[String],
    processor:  &DocumentProcessor<'_, S>,
) -> WalkReport {
    let mut report = WalkReport::default();

    for path in find_documents(root, extensions) {
        tracing::info!("Processing {}", path.display());

        match processor.process_file(&path) {
            Ok(doc) => {
                report.documents_processed   += 1;
                report.directives_resolved   += doc.resolved;
                report.directives_unresolved += doc.unresolved;
                tracing::info!("Completed processing {}", path.display());
            }
            Err(e) => {
                report.documents_failed += 1;
                tracing::error!("Error processing {}: {:#}", path.display(), e);
            }
        }
    }

    report
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::resolver::DirectiveResolver;
    use crate::docs::scanner::{DirectiveScanner, DEFAULT_MARKER};
    use crate::domain::symbol::{SymbolEntry, SymbolKind};
    use crate::domain::traits::LookupError;
    use std::fs;

    struct Everything;

    impl SymbolSource for Everything {
        fn lookup(&self, _container: &str, leaf: &str) -> Result<SymbolEntry, LookupError> {
            Ok(SymbolEntry::new(SymbolKind::Value).with_doc(format!("doc of {leaf}")))
        }
    }

    fn exts() -> Vec<String> {
        vec!["md".to_string(), "mdx".to_string()]
    }

    #[test]
    fn test_extension_filter() {
        assert!(has_doc_extension(Path::new("a/b/index.md"), &exts()));
        assert!(has_doc_extension(Path::new("a/b/page.mdx"), &exts()));
        assert!(!has_doc_extension(Path::new("a/b/notes.txt"), &exts()));
        assert!(!has_doc_extension(Path::new("a/b/md"), &exts()));
        assert!(has_doc_extension(Path::new("x.md"), &[".md".to_string()]));
    }

    #[test]
    fn test_walk_descends_and_filters() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("en/package_reference")).unwrap();
        fs::create_dir_all(root.join("assets.md")).unwrap(); // a directory, not a document
        fs::write(root.join("index.mdx"), "[[autodoc]] a.One").unwrap();
        fs::write(root.join("en/package_reference/main.md"), "[[autodoc]] a.Two").unwrap();
        fs::write(root.join("en/readme.txt"), "[[autodoc]] a.Three").unwrap();

        let found = find_documents(root, &exts());
        assert_eq!(found.len(), 2);

        let src = Everything;
        let processor = DocumentProcessor::new(
            DirectiveScanner::new(DEFAULT_MARKER).unwrap(),
            DirectiveResolver::new(&src, DEFAULT_MARKER),
        );
        let report = process_directory(root, &exts(), &processor);

        assert_eq!(report.documents_processed, 2);
        assert_eq!(report.documents_failed, 0);
        assert_eq!(report.directives_resolved, 2);
        assert_eq!(fs::read_to_string(root.join("index.mdx")).unwrap(), "doc of One");
        assert_eq!(
            fs::read_to_string(root.join("en/package_reference/main.md")).unwrap(),
            "doc of Two"
        );
        // Non-matching files are left alone
        assert_eq!(
            fs::read_to_string(root.join("en/readme.txt")).unwrap(),
            "[[autodoc]] a.Three"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_document_is_processed() {
        let dir  = tempfile::tempdir().unwrap();
        let root = dir.path().join("docs");
        let real = dir.path().join("shared");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&real).unwrap();
        fs::write(real.join("page.md"), "[[autodoc]] a.Linked").unwrap();
        std::os::unix::fs::symlink(real.join("page.md"), root.join("page.md")).unwrap();

        assert_eq!(find_documents(&root, &exts()), vec![root.join("page.md")]);

        let src = Everything;
        let processor = DocumentProcessor::new(
            DirectiveScanner::new(DEFAULT_MARKER).unwrap(),
            DirectiveResolver::new(&src, DEFAULT_MARKER),
        );
        let report = process_directory(&root, &exts(), &processor);
        assert_eq!(report.directives_resolved, 1);
        assert_eq!(fs::read_to_string(real.join("page.md")).unwrap(), "doc of Linked");
    }

    #[test]
    fn test_bad_file_does_not_stop_the_walk() {
        let dir  = tempfile::tempdir().unwrap();
        let root = dir.path();
        // Not valid UTF-8, so reading it as text fails
        fs::write(root.join("a_bad.md"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
        fs::write(root.join("b_good.md"), "[[autodoc]] x.Y").unwrap();

        let src = Everything;
        let processor = DocumentProcessor::new(
            DirectiveScanner::new(DEFAULT_MARKER).unwrap(),
            DirectiveResolver::new(&src, DEFAULT_MARKER),
        );
        let report = process_directory(root, &exts(), &processor);

        assert_eq!(report.documents_failed, 1);
        assert_eq!(report.documents_processed, 1);
        assert_eq!(fs::read_to_string(root.join("b_good.md")).unwrap(), "doc of Y");
    }
}
