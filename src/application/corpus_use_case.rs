// ============================================================
// Layer 2 — Corpus Use Cases
// ============================================================
// Workflows over an extracted DBRD archive:
//
//   export — stream one split to JSON Lines
//   stats  — load one split through the Dataset interface and
//            count records per label
//
// Both run a single generator pass. A missing directory or an
// unreadable review aborts the pass and is returned to the CLI.
//
// Reference: Rust Book §13 (Iterators)

use anyhow::Result;
use burn::data::dataset::Dataset;
use serde::Serialize;
use std::path::PathBuf;

use crate::data::{
    corpus::DbrdCorpus,
    dataset::{LabelCounts, ReviewDataset},
};
use crate::domain::record::Split;
use crate::domain::traits::RecordSource;
use crate::infra::export::RecordExporter;

pub struct CorpusUseCase {
    corpus: DbrdCorpus,
}

/// Result of the `stats` workflow
#[derive(Debug, Clone, Serialize)]
pub struct SplitStats {
    pub split:  Split,
    pub total:  usize,
    pub counts: LabelCounts,
}

impl CorpusUseCase {
    pub fn new(archive_root: impl Into<PathBuf>) -> Self {
        Self { corpus: DbrdCorpus::new(archive_root) }
    }

    /// Write `split` as JSON Lines to `out` (stdout if None)
    pub fn export(&self, split: Split, out: Option<PathBuf>) -> Result<usize> {
        let records  = self.corpus.records(split)?;
        let mut sink = RecordExporter::create(out.as_deref())?;
        let written  = sink.export(records)?;

        tracing::info!("Exported {} '{}' records", written, split);
        Ok(written)
    }

    /// Materialise `split` and count its labels
    pub fn stats(&self, split: Split) -> Result<SplitStats> {
        let dataset = ReviewDataset::load(&self.corpus, split)?;
        Ok(SplitStats {
            split,
            total:  dataset.len(),
            counts: dataset.label_counts(),
        })
    }
}
