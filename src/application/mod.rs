// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal per use case. It owns no parsing, no file formats and no
// printing: it only wires components together in order.
//
//   corpus_use_case.rs  — export / stats over a DBRD archive
//   autodoc_use_case.rs — rewrite a documentation tree
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Corpus workflows (export, stats)
pub mod corpus_use_case;

// The documentation rewriting workflow
pub mod autodoc_use_case;
