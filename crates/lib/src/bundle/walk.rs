//! Source tree walk and file selection.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::manifest::{FileEntry, Manifest, normalize_requested, relative_key};

use super::types::BundleError;

/// Which files a walk keeps.
#[derive(Debug, Clone)]
pub struct Selection {
  extension: String,
  output_name: String,
  tooling_dir: Option<String>,
  /// Normalized allow-list; empty keeps everything.
  requested: HashSet<String>,
}

impl Selection {
  pub fn new(extension: &str, output_name: &str, tooling_dir: Option<&str>, requested: &[String]) -> Self {
    Self {
      extension: extension.to_string(),
      output_name: Path::new(output_name)
        .file_name()
        .map_or_else(|| output_name.to_string(), |name| name.to_string_lossy().into_owned()),
      tooling_dir: tooling_dir.map(str::to_string),
      requested: requested.iter().map(|name| normalize_requested(name)).collect(),
    }
  }

  pub fn has_allow_list(&self) -> bool {
    !self.requested.is_empty()
  }

  /// Whether a file with this name and manifest key is bundled.
  pub fn accepts(&self, file_name: &str, key: &str) -> bool {
    if !file_name.ends_with(&self.extension) {
      return false;
    }
    // Never embed a previous artifact into the next one
    if file_name.ends_with(&self.output_name) {
      return false;
    }
    !self.has_allow_list() || self.requested.contains(key)
  }

  fn is_tooling_dir(&self, entry: &DirEntry) -> bool {
    entry.depth() == 1
      && entry.file_type().is_dir()
      && self
        .tooling_dir
        .as_deref()
        .is_some_and(|dir| entry.file_name().to_str() == Some(dir))
  }
}

/// Walk `root` and build the manifest of selected files.
pub fn collect(root: &Path, selection: &Selection) -> Result<Manifest, BundleError> {
  let mut manifest = Manifest::new();

  let walker = WalkDir::new(root)
    .sort_by_file_name()
    .into_iter()
    .filter_entry(|e| !selection.is_tooling_dir(e));

  for entry in walker {
    let entry = entry.map_err(|e| BundleError::Walk {
      path: root.to_path_buf(),
      source: e,
    })?;

    if !entry.file_type().is_file() {
      continue;
    }

    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    let Some(key) = relative_key(relative) else {
      continue;
    };
    let file_name = entry.file_name().to_string_lossy();
    if !selection.accepts(&file_name, &key) {
      debug!(path = %key, "not selected");
      continue;
    }

    let content = fs::read_to_string(entry.path()).map_err(|e| BundleError::ReadFile {
      path: entry.path().to_path_buf(),
      source: e,
    })?;
    info!(path = %key, bytes = content.len(), "bundling");
    manifest.insert(FileEntry::new(key, content));
  }

  Ok(manifest)
}
