// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, hands off to a use case, and prints the result. All
// business logic lives in Layer 2 and below.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{ArchiveArgs, AutodocArgs, Commands, ExportArgs, SplitArgs};

use crate::data::corpus::{describe, plan_splits};

#[derive(Parser, Debug)]
#[command(
    name = "dbrd-toolkit",
    version,
    about = "DBRD book-review corpus loader and autodoc directive resolver."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Info          => run_info(),
            Commands::Splits(args)  => run_splits(args),
            Commands::Export(args)  => run_export(args),
            Commands::Stats(args)   => run_stats(args),
            Commands::Autodoc(args) => run_autodoc(args),
        }
    }
}

fn run_info() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&describe())?);
    Ok(())
}

fn run_splits(args: ArchiveArgs) -> Result<()> {
    for plan in plan_splits(&args.archive) {
        let mode = if plan.labeled { "labeled" } else { "unlabeled" };
        println!("{:<13} {:<10} {}", plan.split, mode, plan.directory.display());
    }
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    use crate::application::corpus_use_case::CorpusUseCase;

    let use_case = CorpusUseCase::new(args.split.archive.archive);
    let written  = use_case.export(args.split.split.into(), args.out.clone())?;

    // Keep stdout clean for the records themselves
    if args.out.is_some() {
        println!("Exported {written} records.");
    }
    Ok(())
}

fn run_stats(args: SplitArgs) -> Result<()> {
    use crate::application::corpus_use_case::CorpusUseCase;

    let use_case = CorpusUseCase::new(args.archive.archive);
    let stats    = use_case.stats(args.split.into())?;

    println!("split:     {}", stats.split);
    println!("records:   {}", stats.total);
    println!("pos:       {}", stats.counts.pos);
    println!("neg:       {}", stats.counts.neg);
    println!("unlabeled: {}", stats.counts.unlabeled);
    Ok(())
}

fn run_autodoc(args: AutodocArgs) -> Result<()> {
    use crate::application::autodoc_use_case::AutodocUseCase;

    let config = args.into_config()?;
    let report = AutodocUseCase::new(config).execute()?;

    println!(
        "\n{} documents processed ({} failed), {} directives resolved, {} unresolved.",
        report.documents_processed,
        report.documents_failed,
        report.directives_resolved,
        report.directives_unresolved,
    );
    Ok(())
}
