// ============================================================
// Layer 6 — JSON Symbol Registry
// ============================================================
// The symbol environment the directive resolver looks paths up
// in. Instead of introspecting a live runtime, documented symbols
// are described in JSON registry files:
//
//   {
//     "datasets.load": {
//       "load_dataset": {
//         "kind": "function",
//         "signature": "(path: str, name=None, split=None)",
//         "doc": "Load a dataset from the Hub."
//       }
//     },
//     "datasets.arrow_dataset": {
//       "Dataset": { "kind": "class", "doc": "A Dataset backed by an Arrow table." }
//     }
//   }
//
// Registries are found on an explicit search path. Each entry is
// either a .json file or a directory whose *.json files are read in
// file-name order. Like a module search path, the first definition
// of a container wins; later ones are ignored with a debug log.
// Search-path entries that do not exist are skipped.
//
// A registry file that cannot be read or parsed does not stop the
// run. It is logged and remembered: a lookup whose container is
// not found anywhere may have lived in that file, so it fails with
// a backend error carrying the load error instead of "not found".
//
// Reference: serde_json documentation
//            Rust Book §8 (Hash Maps)

use anyhow::{Context, Result};
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::{Path, PathBuf},
};

use crate::domain::symbol::SymbolEntry;
use crate::domain::traits::{LookupError, SymbolSource};

/// On-disk shape of one registry file: container → leaf → entry
pub type RegistryFile = BTreeMap<String, BTreeMap<String, SymbolEntry>>;

#[derive(Debug, Default)]
pub struct SymbolRegistry {
    containers: HashMap<String, HashMap<String, SymbolEntry>>,
    /// Load errors of registry files that were skipped
    broken:     Vec<String>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every registry file reachable from `search_path`, in order.
    /// Unreadable files and directories are skipped; see `broken_files`.
    pub fn from_search_path(search_path: &[PathBuf]) -> Self {
        let mut registry = Self::new();

        for entry in search_path {
            if entry.is_dir() {
                match json_files(entry) {
                    Ok(files) => {
                        for file in files {
                            registry.load_or_skip(&file);
                        }
                    }
                    Err(e) => registry.skip(e),
                }
            } else if entry.is_file() {
                registry.load_or_skip(entry);
            } else {
                tracing::warn!("Search path entry '{}' does not exist", entry.display());
            }
        }

        tracing::info!(
            "Symbol registry holds {} containers ({} files skipped)",
            registry.container_count(),
            registry.broken_files()
        );
        registry
    }

    fn load_or_skip(&mut self, path: &Path) {
        if let Err(e) = self.load_file(path) {
            self.skip(e);
        }
    }

    fn skip(&mut self, error: anyhow::Error) {
        tracing::warn!("Skipping symbol registry: {:#}", error);
        self.broken.push(format!("{error:#}"));
    }

    /// Merge one registry file; containers already known are kept
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read symbol registry '{}'", path.display()))?;
        let file: RegistryFile = serde_json::from_str(&json)
            .with_context(|| format!("Cannot parse symbol registry '{}'", path.display()))?;

        for (container, leaves) in file {
            if self.containers.contains_key(&container) {
                tracing::debug!(
                    "'{}' in '{}' is shadowed by an earlier definition",
                    container,
                    path.display()
                );
                continue;
            }
            self.containers.insert(container, leaves.into_iter().collect());
        }
        Ok(())
    }

    /// Add a single entry, creating its container if needed
    pub fn insert(&mut self, container: &str, leaf: &str, entry: SymbolEntry) {
        self.containers
            .entry(container.to_string())
            .or_default()
            .insert(leaf.to_string(), entry);
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Number of registry files skipped because they failed to load
    pub fn broken_files(&self) -> usize {
        self.broken.len()
    }
}

impl SymbolSource for SymbolRegistry {
    fn lookup(&self, container: &str, leaf: &str) -> Result<SymbolEntry, LookupError> {
        let Some(leaves) = self.containers.get(container) else {
            if self.broken.is_empty() {
                return Err(LookupError::ContainerNotFound(container.to_string()));
            }
            return Err(LookupError::Backend(self.broken.join("; ")));
        };

        leaves
            .get(leaf)
            .cloned()
            .ok_or_else(|| LookupError::AttributeNotFound {
                container: container.to_string(),
                leaf:      leaf.to_string(),
            })
    }
}

/// *.json files directly inside `dir`, sorted by name
fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Cannot read search path directory '{}'", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    files.sort();
    Ok(files)
}
