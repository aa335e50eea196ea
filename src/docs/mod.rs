// ============================================================
// Layer 4b — Autodoc Directive Pipeline
// ============================================================
// Rewrites documentation files in place, replacing inline
// directives like
//
//   [[autodoc]] datasets.load.load_dataset
//
// with the documentation of the referenced symbol.
//
// The pipeline for one document:
//
//   document text
//       │
//       ▼
//   DirectiveScanner   → finds `<marker> <symbol.path>` spans
//       │
//       ▼
//   DirectiveResolver  → looks each path up in a SymbolSource,
//       │                falling back through the alias table,
//       │                and renders docs or a placeholder
//       ▼
//   DocumentProcessor  → substitutes every span, writes the file
//
// walker.rs drives the processor over a directory tree and keeps
// going when a single file fails.
//
// Reference: regex crate documentation
//            ignore crate documentation (WalkBuilder)

/// Finds directive spans in text
pub mod scanner;

/// Turns a symbol path into replacement text
pub mod resolver;

/// Scan + resolve + substitute + persist for one document
pub mod processor;

/// Recursive directory walk over markdown files
pub mod walker;
