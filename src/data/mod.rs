// ============================================================
// Layer 4 — Corpus Data Pipeline
// ============================================================
// Everything from an extracted DBRD archive to records:
//
//   extracted archive root
//       │
//       ▼
//   corpus::plan_splits   → train / test / unsupervised
//       │                   directories + labeling mode
//       ▼
//   generator::generate   → lazy (key, record) pairs per split
//       │
//       ▼
//   ReviewDataset         → implements Burn's Dataset trait
//
// Downloading and extracting the archive is not done here; the
// caller hands over a directory that already has the layout.
//
// Reference: Burn Book §4 (Datasets)
//            Rust Book §13 (Iterators and Closures)

/// Metadata, split planning and the RecordSource over an archive
pub mod corpus;

/// Lazy per-split record generation
pub mod generator;

/// Implements Burn's Dataset trait for review records
pub mod dataset;
