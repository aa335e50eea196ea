// ============================================================
// Layer 4 — Split Record Generator
// ============================================================
// Turns one split directory into a lazy sequence of
// (RecordKey, CorpusRecord) pairs.
//
// Labeled splits:
//   <dir>/pos/*  → keys pos_0, pos_1, ...   label Pos
//   <dir>/neg/*  → keys neg_0, neg_1, ...   label Neg
//   All pos items are emitted before any neg item.
//
// Unlabeled split:
//   <dir>/unsup/* → keys 0, 1, ...          label Unlabeled (-1)
//
// Within a directory, files are taken in lexicographic filename
// order, so the index in a key is the file's position in that
// sorted listing.
//
// Directory listings happen when the generator is created; file
// contents are only read as the iterator is advanced. The first
// read error is yielded once and ends the pass: no retries, no
// skipping of bad files.
//
// Reference: Rust Book §13 (Iterators)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    vec,
};

use crate::data::corpus::UNSUP_DIR;
use crate::domain::record::{CorpusRecord, Label, RecordKey};

/// Order in which label directories of a labeled split are emitted
const LABEL_ORDER: [Label; 2] = [Label::Pos, Label::Neg];

/// A file waiting to be read, with the key and label it will get
#[derive(Debug)]
struct PendingFile {
    key:   RecordKey,
    label: Label,
    path:  PathBuf,
}

/// Single-pass iterator over the records of one split.
#[derive(Debug)]
pub struct SplitGenerator {
    pending: vec::IntoIter<PendingFile>,
    /// Set after the first error so the pass stops there
    aborted: bool,
}

/// Start a pass over `directory`. See the module header for layout.
pub fn generate(directory: &Path, labeled: bool) -> Result<SplitGenerator> {
    SplitGenerator::new(directory, labeled)
}

impl SplitGenerator {
    pub fn new(directory: &Path, labeled: bool) -> Result<Self> {
        let mut pending = Vec::new();

        if labeled {
            for label in LABEL_ORDER {
                // LABEL_ORDER only holds labels that have a directory
                let Some(sub) = label.dir_name() else { continue };
                let files = sorted_listing(&directory.join(sub))?;
                tracing::debug!("{} '{}' files in '{}'", files.len(), sub, directory.display());

                pending.extend(files.into_iter().enumerate().map(|(index, path)| PendingFile {
                    key: RecordKey::Labeled { label, index },
                    label,
                    path,
                }));
            }
        } else {
            let files = sorted_listing(&directory.join(UNSUP_DIR))?;
            tracing::debug!("{} unlabeled files in '{}'", files.len(), directory.display());

            pending.extend(files.into_iter().enumerate().map(|(index, path)| PendingFile {
                key:   RecordKey::Index(index),
                label: Label::Unlabeled,
                path,
            }));
        }

        Ok(Self { pending: pending.into_iter(), aborted: false })
    }

    /// Records not yet yielded (upper bound if a read fails)
    pub fn remaining(&self) -> usize {
        if self.aborted { 0 } else { self.pending.len() }
    }
}

impl Iterator for SplitGenerator {
    type Item = Result<(RecordKey, CorpusRecord)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.aborted {
            return None;
        }
        let file = self.pending.next()?;

        match fs::read_to_string(&file.path)
            .with_context(|| format!("Cannot read review '{}'", file.path.display()))
        {
            Ok(text) => Some(Ok((file.key, CorpusRecord::new(text, file.label)))),
            Err(e) => {
                self.aborted = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

/// List a directory's entries sorted by file name.
fn sorted_listing(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory '{}'", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Cannot list directory '{}'", dir.display()))?;

    // read_dir order is platform dependent
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}
