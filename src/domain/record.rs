// ============================================================
// Layer 3 — Corpus Record Domain Types
// ============================================================
// One review = one record: the raw text of a single file plus
// its sentiment label.
//
// Label encoding follows the class-label feature of the corpus:
//   neg       → 0
//   pos       → 1
//   unlabeled → -1 (sentinel used by the unsupervised split)
//
// Record keys are scoped to a split:
//   labeled   → "<label>_<index>"  e.g. "pos_0", "neg_12"
//   unlabeled → "<index>"          e.g. "0", "1", ...
// where <index> is the position in the filename-sorted listing
// of the directory the file came from.
//
// Reference: Rust Book §5 (Structs), §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// ─── Label ────────────────────────────────────────────────────────────────────
/// Sentiment label attached to a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Neg,
    Pos,
    /// No label; only produced by the unsupervised split
    Unlabeled,
}

impl Label {
    /// The two class names, in class-index order
    pub const CLASS_NAMES: [&'static str; 2] = ["neg", "pos"];

    /// Sentinel class index for unlabeled records
    pub const UNLABELED_INDEX: i64 = -1;

    /// Integer encoding used in the record schema
    pub fn class_index(&self) -> i64 {
        match self {
            Label::Neg       => 0,
            Label::Pos       => 1,
            Label::Unlabeled => Self::UNLABELED_INDEX,
        }
    }

    /// Inverse of `class_index`
    pub fn from_class_index(index: i64) -> Option<Self> {
        match index {
            0  => Some(Label::Neg),
            1  => Some(Label::Pos),
            -1 => Some(Label::Unlabeled),
            _  => None,
        }
    }

    /// Name of the label sub-directory inside a labeled split.
    /// Unlabeled records have no such directory.
    pub fn dir_name(&self) -> Option<&'static str> {
        match self {
            Label::Neg       => Some("neg"),
            Label::Pos       => Some("pos"),
            Label::Unlabeled => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.dir_name().unwrap_or("unlabeled"))
    }
}

// Records carry the label as its integer encoding on the wire
impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.class_index())
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = i64::deserialize(deserializer)?;
        Label::from_class_index(index).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown class index {index}"))
        })
    }
}

// ─── Split ────────────────────────────────────────────────────────────────────
/// A named partition of the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
    Unsupervised,
}

impl Split {
    /// All splits, in the order they are planned
    pub const ALL: [Split; 3] = [Split::Train, Split::Test, Split::Unsupervised];

    pub fn name(&self) -> &'static str {
        match self {
            Split::Train        => "train",
            Split::Test         => "test",
            Split::Unsupervised => "unsupervised",
        }
    }

    /// Whether records of this split carry a pos/neg label
    pub fn is_labeled(&self) -> bool {
        !matches!(self, Split::Unsupervised)
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// ─── RecordKey ────────────────────────────────────────────────────────────────
/// Split-scoped identity of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    /// `<label>_<index>` for labeled splits
    Labeled { label: Label, index: usize },
    /// Plain positional index for the unsupervised split
    Index(usize),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKey::Labeled { label, index } => write!(f, "{label}_{index}"),
            RecordKey::Index(index)             => write!(f, "{index}"),
        }
    }
}

impl Serialize for RecordKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─── CorpusRecord ─────────────────────────────────────────────────────────────
/// A single review: file contents plus label.
/// Immutable once yielded by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRecord {
    /// Full contents of the review file
    pub text: String,

    /// Sentiment label (or the unlabeled sentinel)
    pub label: Label,
}

impl CorpusRecord {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self { text: text.into(), label }
    }
}
