// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that read or write files in a fixed
// format:
//
//   config.rs          — AutodocConfig, saved/loaded as JSON
//
//   symbol_registry.rs — JSON symbol registries found on an
//                        explicit search path; the concrete
//                        SymbolSource behind the resolver
//
//   export.rs          — JSON Lines writer for split records
//
// Keeping these here lets the docs and data layers stay free of
// serialisation details, and makes each format swappable.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Autodoc configuration file
pub mod config;

/// Symbol registry loading and lookup
pub mod symbol_registry;

/// Split export as JSON Lines
pub mod export;
