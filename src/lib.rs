//! DBRD toolkit
//!
//! Two independent pipelines:
//! - a loader for the Dutch Book Reviews Dataset (split planning,
//!   lazy per-split record generation, a Burn `Dataset` view)
//! - an autodoc post-processor that replaces `[[autodoc]] a.b.C`
//!   directives in markdown files with symbol documentation

pub mod application;
pub mod cli;
pub mod data;
pub mod docs;
pub mod domain;
pub mod infra;
