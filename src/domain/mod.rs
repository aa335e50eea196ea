// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that name the core
// concepts of both pipelines:
//
//   record.rs — corpus side: labels, splits, record keys
//               and the (text, label) record itself
//   symbol.rs — autodoc side: what a symbol path points at
//               (kind, documentation, signature)
//   traits.rs — the seams other layers implement:
//               SymbolSource (symbol lookup) and
//               RecordSource (anything that yields records)
//
// Rules for this layer:
//   - NO file I/O
//   - NO Burn framework types
//   - NO regex or directory walking
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Corpus records, labels and splits
pub mod record;

// Described entities returned by symbol lookup
pub mod symbol;

// Core abstractions (traits) that other layers implement
pub mod traits;
