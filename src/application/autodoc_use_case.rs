// ============================================================
// Layer 2 — AutodocUseCase
// ============================================================
// Orchestrates one run of the directive pipeline:
//
//   Step 1: Load the symbol registry from the search path (Layer 6)
//   Step 2: Build scanner + resolver from the config     (Layer 4b)
//   Step 3: Walk the docs tree and rewrite each document  (Layer 4b)
//
// Registry files that fail to load are skipped in step 1 and
// surface as inline diagnostics on the directives they could
// have served. Per-file and per-directive failures are contained
// inside step 3 and only show up in the returned report. A bad
// marker in step 2 aborts the run before any document is touched.

use anyhow::{bail, Result};

use crate::docs::{
    processor::DocumentProcessor,
    resolver::DirectiveResolver,
    scanner::DirectiveScanner,
    walker::{process_directory, WalkReport},
};
use crate::infra::{config::AutodocConfig, symbol_registry::SymbolRegistry};

pub struct AutodocUseCase {
    config: AutodocConfig,
}

impl AutodocUseCase {
    pub fn new(config: AutodocConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<WalkReport> {
        let cfg = &self.config;

        if !cfg.docs_dir.is_dir() {
            bail!("Docs directory '{}' does not exist", cfg.docs_dir.display());
        }

        // ── Step 1: Symbol environment ───────────────────────────────────────
        let registry = SymbolRegistry::from_search_path(&cfg.search_path);

        // ── Step 2: Scanner + resolver ───────────────────────────────────────
        let scanner  = DirectiveScanner::new(&cfg.marker)?;
        let resolver = DirectiveResolver::new(&registry, cfg.marker.as_str())
            .with_aliases(cfg.aliases.clone())
            .with_fence_language(cfg.fence_language.as_str());
        let processor = DocumentProcessor::new(scanner, resolver);

        // ── Step 3: Walk ─────────────────────────────────────────────────────
        tracing::info!("Rewriting documents under '{}'", cfg.docs_dir.display());
        let report = process_directory(&cfg.docs_dir, &cfg.extensions, &processor);

        tracing::info!(
            "{} documents processed, {} failed, {} directives resolved, {} unresolved",
            report.documents_processed,
            report.documents_failed,
            report.directives_resolved,
            report.directives_unresolved,
        );
        Ok(report)
    }
}
