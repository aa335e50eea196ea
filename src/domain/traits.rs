// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two seams of the system:
//
//   RecordSource — anything that can produce the records of a
//                  split. The DBRD archive reader implements it;
//                  the dataset and export code only see the trait.
//
//   SymbolSource — a read-only lookup from (container, leaf) to a
//                  described entity. The JSON symbol registry
//                  implements it; the directive resolver only sees
//                  the trait, so tests can plug in an in-memory map.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §9 (Error Handling)

use anyhow::Result;
use thiserror::Error;

use crate::domain::record::{CorpusRecord, RecordKey, Split};
use crate::domain::symbol::SymbolEntry;

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Any component that can yield the (key, record) pairs of a split.
pub trait RecordSource {
    /// Lazy, finite, single-pass sequence of records
    type Records: Iterator<Item = Result<(RecordKey, CorpusRecord)>>;

    /// Start one pass over `split`.
    /// Fails up front if the split's directories cannot be listed.
    fn records(&self, split: Split) -> Result<Self::Records>;
}

// ─── SymbolSource ─────────────────────────────────────────────────────────────
/// Why a lookup did not produce an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No container is registered under this path
    #[error("no container named '{0}'")]
    ContainerNotFound(String),

    /// The container exists but has no such attribute
    #[error("'{container}' has no attribute '{leaf}'")]
    AttributeNotFound { container: String, leaf: String },

    /// The path itself cannot be looked up
    #[error("{0}")]
    InvalidPath(String),

    /// Any other failure inside the source
    #[error("{0}")]
    Backend(String),
}

impl LookupError {
    /// True for "not found" style failures, which alias rules may recover from
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LookupError::ContainerNotFound(_) | LookupError::AttributeNotFound { .. }
        )
    }
}

/// Read-only symbol environment consulted by the directive resolver.
pub trait SymbolSource {
    /// Fetch `leaf` as an attribute of the container at `container`
    fn lookup(&self, container: &str, leaf: &str) -> Result<SymbolEntry, LookupError>;
}
