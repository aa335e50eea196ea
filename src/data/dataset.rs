use anyhow::Result;
use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::record::{CorpusRecord, Label, Split};
use crate::domain::traits::RecordSource;

/// One materialised review, keyed the way the generator keyed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub id:    String,
    pub text:  String,
    pub label: Label,
}

impl ReviewItem {
    pub fn is_labeled(&self) -> bool {
        self.label != Label::Unlabeled
    }
}

/// Per-label counts of a split
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LabelCounts {
    pub pos:       usize,
    pub neg:       usize,
    pub unlabeled: usize,
}

impl LabelCounts {
    pub fn total(&self) -> usize {
        self.pos + self.neg + self.unlabeled
    }
}

/// All records of one split held in memory.
pub struct ReviewDataset {
    split: Split,
    items: Vec<ReviewItem>,
}

impl ReviewDataset {
    pub fn new(split: Split, items: Vec<ReviewItem>) -> Self { Self { split, items } }

    /// Run one full generator pass over `split`; the first read error aborts the load.
    pub fn load<S: RecordSource>(source: &S, split: Split) -> Result<Self> {
        let items = source
            .records(split)?
            .map(|item| {
                item.map(|(key, CorpusRecord { text, label })| ReviewItem {
                    id: key.to_string(),
                    text,
                    label,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!("Loaded {} '{}' reviews", items.len(), split);
        Ok(Self::new(split, items))
    }

    pub fn split(&self) -> Split { self.split }

    pub fn label_counts(&self) -> LabelCounts {
        self.items.iter().fold(LabelCounts::default(), |mut c, item| {
            match item.label {
                Label::Pos       => c.pos += 1,
                Label::Neg       => c.neg += 1,
                Label::Unlabeled => c.unlabeled += 1,
            }
            c
        })
    }
}

impl Dataset<ReviewItem> for ReviewDataset {
    fn get(&self, index: usize) -> Option<ReviewItem> {
        self.items.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RecordKey;
    use std::vec;

    /// In-memory source so the dataset can be tested without a disk layout
    struct FixedSource(Vec<(RecordKey, CorpusRecord)>);

    impl RecordSource for FixedSource {
        type Records = vec::IntoIter<Result<(RecordKey, CorpusRecord)>>;

        fn records(&self, _split: Split) -> Result<Self::Records> {
            Ok(self.0.iter().cloned().map(Ok).collect::<Vec<_>>().into_iter())
        }
    }

    #[test]
    fn test_load_and_index() {
        let source = FixedSource(vec![
            (RecordKey::Labeled { label: Label::Pos, index: 0 }, CorpusRecord::new("a", Label::Pos)),
            (RecordKey::Labeled { label: Label::Neg, index: 0 }, CorpusRecord::new("b", Label::Neg)),
        ]);
        let ds = ReviewDataset::load(&source, Split::Test).unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.split(), Split::Test);
        assert_eq!(ds.get(0).unwrap().id, "pos_0");
        assert_eq!(ds.get(1).unwrap().label, Label::Neg);
        assert!(ds.get(2).is_none());

        let counts = ds.label_counts();
        assert_eq!((counts.pos, counts.neg, counts.unlabeled), (1, 1, 0));
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn test_unlabeled_items() {
        let source = FixedSource(vec![
            (RecordKey::Index(0), CorpusRecord::new("x", Label::Unlabeled)),
        ]);
        let ds = ReviewDataset::load(&source, Split::Unsupervised).unwrap();
        let item = ds.get(0).unwrap();
        assert!(!item.is_labeled());
        assert_eq!(item.id, "0");
    }
}
