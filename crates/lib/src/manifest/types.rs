//! Manifest types for instpack.
//!
//! # Structure
//!
//! The manifest is a flat map of [`FileEntry`] pairs keyed by relative path:
//!
//! ```json
//! {
//!   "hack.js": "export async function main(ns) { ... }",
//!   "/lib/heap.js": "export class Heap { ... }"
//! }
//! ```
//!
//! # Ordering
//!
//! Uses [`BTreeMap`] so the serialized literal, and therefore the order in which
//! the bootstrap replays entries, is deterministic across runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single bundled file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
  /// Normalized path (see [`relative_key`](super::relative_key)).
  pub path: String,
  /// Full text content, untransformed.
  pub content: String,
}

impl FileEntry {
  pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      content: content.into(),
    }
  }
}

/// Mapping from relative path to file content.
///
/// Keys are unique. Inserting an existing key replaces its content.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
  files: BTreeMap<String, String>,
}

impl Manifest {
  pub fn new() -> Self {
    Self::default()
  }

  /// Insert an entry, returning the content it replaced.
  pub fn insert(&mut self, entry: FileEntry) -> Option<String> {
    let replaced = self.files.insert(entry.path.clone(), entry.content);
    if replaced.is_some() {
      warn!(path = %entry.path, "duplicate manifest path, keeping the last one");
    }
    replaced
  }

  pub fn get(&self, path: &str) -> Option<&str> {
    self.files.get(path).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.files.len()
  }

  pub fn is_empty(&self) -> bool {
    self.files.is_empty()
  }

  /// Entries in replay order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.files.iter().map(|(path, content)| (path.as_str(), content.as_str()))
  }

  pub fn paths(&self) -> impl Iterator<Item = &str> {
    self.files.keys().map(String::as_str)
  }

  /// Total size of all contents in bytes.
  pub fn content_bytes(&self) -> u64 {
    self.files.values().map(|c| c.len() as u64).sum()
  }
}

impl FromIterator<FileEntry> for Manifest {
  fn from_iter<I: IntoIterator<Item = FileEntry>>(iter: I) -> Self {
    let mut manifest = Manifest::new();
    for entry in iter {
      manifest.insert(entry);
    }
    manifest
  }
}
