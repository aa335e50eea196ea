// ============================================================
// Layer 4 — DBRD Corpus Description
// ============================================================
// Declares everything about the Dutch Book Reviews Dataset that
// is fixed: metadata, feature schema, archive layout, and how the
// three splits map onto directories.
//
// Archive layout (after download + extraction, which is done by
// whoever hands us the archive root):
//
//   <archive_root>/
//     110kDBRD/
//       train/{pos,neg}/*.txt
//       test/{pos,neg}/*.txt
//       unsup/*.txt
//
// planSplits is pure path arithmetic. Nothing touches the disk
// until a generator is started for one of the splits.
//
// Reference: Rust Book §7 (Paths), §13 (Iterators)

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::data::generator::SplitGenerator;
use crate::domain::record::{Label, Split};
use crate::domain::traits::RecordSource;

pub const DATASET_NAME: &str = "dbrd";
pub const CONFIG_NAME: &str = "plain_text";
pub const CONFIG_DESCRIPTION: &str = "Plain text";
pub const VERSION: &str = "1.0.0";

pub const HOMEPAGE: &str = "https://benjaminvdb.github.io/DBRD/";

pub const DOWNLOAD_URL: &str =
    "https://github.com/benjaminvdb/DBRD/releases/download/v3.0/DBRD_v3.tgz";

/// Directory inside the extracted archive that holds the splits
pub const DATA_DIR: &str = "110kDBRD";

/// Directory name of the unlabeled reviews
pub const UNSUP_DIR: &str = "unsup";

pub const DESCRIPTION: &str = "\
The DBRD (pronounced dee-bird) dataset contains over 110k book reviews along with associated \
binary sentiment polarity labels. It is greatly influenced by the Large Movie Review Dataset \
and intended as a benchmark for sentiment classification in Dutch. The reviews were scraped \
from the Dutch Hebban website (https://hebban.nl) using scripts which can be found in the \
DBRD GitHub repository (https://github.com/benjaminvdb/DBRD).";

pub const LICENSE: &str = "\
All code in this repository is licensed under a MIT License.
The dataset is licensed under a Creative Commons Attribution-NonCommercial-ShareAlike 4.0 International License.";

pub const CITATION: &str = r#"@article{DBLP:journals/corr/abs-1910-00896,
  author    = {Benjamin van der Burgh and
               Suzan Verberne},
  title     = {The merits of Universal Language Model Fine-tuning for Small Datasets
               - a case with Dutch book reviews},
  journal   = {CoRR},
  volume    = {abs/1910.00896},
  year      = {2019},
  url       = {http://arxiv.org/abs/1910.00896},
  archivePrefix = {arXiv},
  eprint    = {1910.00896},
  timestamp = {Fri, 04 Oct 2019 12:28:06 +0200},
  biburl    = {https://dblp.org/rec/journals/corr/abs-1910-00896.bib},
  bibsource = {dblp computer science bibliography, https://dblp.org}
}"#;

// ─── Metadata ─────────────────────────────────────────────────────────────────
/// Type of one feature column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureType {
    /// Free text
    Value { dtype: &'static str },
    /// Categorical label with named classes, index = position in `names`
    ClassLabel { names: Vec<&'static str> },
}

/// One named column of the feature schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: FeatureType,
}

/// Fixed dataset metadata returned by `describe()`
#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub name:            &'static str,
    pub config_name:     &'static str,
    pub config_description: &'static str,
    pub version:         &'static str,
    pub description:     &'static str,
    pub features:        Vec<Feature>,
    /// DBRD declares no (input, target) pair
    pub supervised_keys: Option<(&'static str, &'static str)>,
    pub homepage:        &'static str,
    pub license:         &'static str,
    pub citation:        &'static str,
    pub download_url:    &'static str,
}

/// Describe the corpus: schema `text: string`, `label: class{neg,pos}`,
/// plus citation, license and homepage.
pub fn describe() -> DatasetInfo {
    DatasetInfo {
        name:               DATASET_NAME,
        config_name:        CONFIG_NAME,
        config_description: CONFIG_DESCRIPTION,
        version:            VERSION,
        description:        DESCRIPTION,
        features: vec![
            Feature {
                name: "text",
                kind: FeatureType::Value { dtype: "string" },
            },
            Feature {
                name: "label",
                kind: FeatureType::ClassLabel { names: Label::CLASS_NAMES.to_vec() },
            },
        ],
        supervised_keys: None,
        homepage:        HOMEPAGE,
        license:         LICENSE,
        citation:        CITATION,
        download_url:    DOWNLOAD_URL,
    }
}

// ─── Split planning ───────────────────────────────────────────────────────────
/// Where a split lives and whether its records are labeled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitDescriptor {
    pub split:     Split,
    /// Directory handed to the generator
    pub directory: PathBuf,
    pub labeled:   bool,
}

/// Map the extracted archive root to the three split descriptors.
pub fn plan_splits(archive_root: &Path) -> Vec<SplitDescriptor> {
    Split::ALL
        .iter()
        .map(|&split| split_descriptor(archive_root, split))
        .collect()
}

/// Descriptor of a single split.
///
/// The unsupervised descriptor points at the data directory itself;
/// the generator descends into its `unsup` child.
pub fn split_descriptor(archive_root: &Path, split: Split) -> SplitDescriptor {
    let data_dir  = archive_root.join(DATA_DIR);
    let directory = match split {
        Split::Train        => data_dir.join("train"),
        Split::Test         => data_dir.join("test"),
        Split::Unsupervised => data_dir,
    };
    SplitDescriptor { split, directory, labeled: split.is_labeled() }
}

// ─── DbrdCorpus ───────────────────────────────────────────────────────────────
/// An extracted DBRD archive on disk.
/// Implements RecordSource so callers never deal with paths.
#[derive(Debug, Clone)]
pub struct DbrdCorpus {
    archive_root: PathBuf,
}

impl DbrdCorpus {
    pub fn new(archive_root: impl Into<PathBuf>) -> Self {
        Self { archive_root: archive_root.into() }
    }

    /// The planned descriptor for one split
    pub fn descriptor(&self, split: Split) -> SplitDescriptor {
        split_descriptor(&self.archive_root, split)
    }

    /// Texts of every train record, for vocabulary building.
    pub fn vocab_texts(&self) -> Result<impl Iterator<Item = Result<String>>> {
        Ok(self
            .records(Split::Train)?
            .map(|item| item.map(|(_, record)| record.text)))
    }
}

impl RecordSource for DbrdCorpus {
    type Records = SplitGenerator;

    fn records(&self, split: Split) -> Result<SplitGenerator> {
        let descriptor = self.descriptor(split);
        tracing::info!(
            "Generating '{}' split from '{}'",
            split,
            descriptor.directory.display()
        );
        SplitGenerator::new(&descriptor.directory, descriptor.labeled)
    }
}
