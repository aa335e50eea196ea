// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Subcommands:
//   info    — dataset metadata
//   splits  — planned split directories for an archive
//   export  — one split as JSON Lines
//   stats   — per-label counts of one split
//   autodoc — rewrite [[autodoc]] directives in a docs tree
//
// clap's derive macros generate help text, error messages for
// missing args and type conversion (string → PathBuf, Split).

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::record::Split;
use crate::infra::config::AutodocConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print dataset metadata (schema, citation, license) as JSON
    Info,

    /// Print the split directories planned for an extracted archive
    Splits(ArchiveArgs),

    /// Write one split as JSON Lines
    Export(ExportArgs),

    /// Load one split and print per-label counts
    Stats(SplitArgs),

    /// Replace autodoc directives in markdown files with symbol documentation
    Autodoc(AutodocArgs),
}

/// Split names accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SplitArg {
    Train,
    Test,
    Unsupervised,
}

impl From<SplitArg> for Split {
    fn from(s: SplitArg) -> Self {
        match s {
            SplitArg::Train        => Split::Train,
            SplitArg::Test         => Split::Test,
            SplitArg::Unsupervised => Split::Unsupervised,
        }
    }
}

#[derive(Args, Debug)]
pub struct ArchiveArgs {
    /// Root of the extracted DBRD archive (the directory holding 110kDBRD/)
    #[arg(long)]
    pub archive: PathBuf,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    #[command(flatten)]
    pub archive: ArchiveArgs,

    /// Which split to read
    #[arg(long, value_enum, default_value_t = SplitArg::Train)]
    pub split: SplitArg,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub split: SplitArgs,

    /// Output file; stdout when omitted
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for `autodoc`. Flags override values from --config.
#[derive(Args, Debug)]
pub struct AutodocArgs {
    /// JSON config file; defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Root of the documentation tree to rewrite
    #[arg(long)]
    pub docs_dir: Option<PathBuf>,

    /// Symbol registry file or directory; repeat to search several, in order
    #[arg(long = "search-path")]
    pub search_path: Vec<PathBuf>,

    /// Literal directive marker
    #[arg(long)]
    pub marker: Option<String>,

    /// Ignore the alias table from the config
    #[arg(long)]
    pub no_aliases: bool,
}

impl AutodocArgs {
    /// Build the application-layer config: file (or defaults), then flags
    pub fn into_config(self) -> Result<AutodocConfig> {
        let mut cfg = AutodocConfig::load_or_default(self.config.as_deref())?;

        if let Some(dir) = self.docs_dir {
            cfg.docs_dir = dir;
        }
        if !self.search_path.is_empty() {
            cfg.search_path = self.search_path;
        }
        if let Some(marker) = self.marker {
            cfg.marker = marker;
        }
        if self.no_aliases {
            cfg.aliases.clear();
        }
        Ok(cfg)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = AutodocArgs {
            config:      None,
            docs_dir:    Some(PathBuf::from("site")),
            search_path: vec![PathBuf::from("a.json"), PathBuf::from("b")],
            marker:      None,
            no_aliases:  true,
        };
        let cfg = args.into_config().unwrap();
        assert_eq!(cfg.docs_dir, PathBuf::from("site"));
        assert_eq!(cfg.search_path.len(), 2);
        assert_eq!(cfg.marker, "[[autodoc]]");
        assert!(cfg.aliases.is_empty());
    }

    #[test]
    fn test_split_arg_conversion() {
        assert_eq!(Split::from(SplitArg::Unsupervised), Split::Unsupervised);
    }
}
