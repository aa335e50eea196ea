// ============================================================
// Layer 6 — Record Exporter
// ============================================================
// Writes the records of a split as JSON Lines, one object per
// line, in generator order:
//
//   {"id":"pos_0","text":"Wat een prachtig boek...","label":1}
//   {"id":"pos_1","text":"...","label":1}
//   {"id":"neg_0","text":"...","label":0}
//
// Output goes to any io::Write (a file or stdout). The first
// read error from the generator stops the export and is returned;
// lines already written stay written.
//
// Reference: Rust Book §12 (I/O), serde_json documentation

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::domain::record::{CorpusRecord, Label, RecordKey};

/// One exported line
#[derive(Serialize)]
struct ExportLine<'a> {
    id:    &'a RecordKey,
    text:  &'a str,
    label: Label,
}

pub struct RecordExporter {
    out: Box<dyn Write>,
}

impl RecordExporter {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out }
    }

    /// Export to a file, or to stdout when `path` is None
    pub fn create(path: Option<&Path>) -> Result<Self> {
        let out: Box<dyn Write> = match path {
            Some(p) => {
                let file = File::create(p)
                    .with_context(|| format!("Cannot create export file '{}'", p.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(Self::new(out))
    }

    /// Write every record; returns how many were written
    pub fn export<I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = Result<(RecordKey, CorpusRecord)>>,
    {
        let mut written = 0usize;
        for item in records {
            let (key, record) = item?;
            let line = ExportLine { id: &key, text: &record.text, label: record.label };
            serde_json::to_writer(&mut self.out, &line)?;
            self.out.write_all(b"\n")?;
            written += 1;
        }
        self.out.flush()?;
        Ok(written)
    }
}
