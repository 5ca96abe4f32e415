//! Bundle options, results and errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::artifact::{ArtifactError, Variant};
use crate::bootstrap::WaitPolicy;
use crate::consts::{DEFAULT_ARTIFACT_NAME, DEFAULT_EXTENSION, DEFAULT_TOOLING_DIR};

/// Options for one bundle run.
#[derive(Debug, Clone)]
pub struct BundleOptions {
  /// Source tree to walk. The artifact is written here too.
  pub root: PathBuf,
  /// Artifact file name. Files whose name ends with it are never bundled.
  pub output_name: String,
  /// Only files whose name ends with this are bundled.
  pub extension: String,
  /// Top-level directory that is not walked.
  pub tooling_dir: Option<String>,
  pub variant: Variant,
  /// Relative paths to include. Empty means every matching file.
  pub requested: Vec<String>,
  pub wait: WaitPolicy,
}

impl Default for BundleOptions {
  fn default() -> Self {
    Self {
      root: PathBuf::from("."),
      output_name: DEFAULT_ARTIFACT_NAME.to_string(),
      extension: DEFAULT_EXTENSION.to_string(),
      tooling_dir: Some(DEFAULT_TOOLING_DIR.to_string()),
      variant: Variant::default(),
      requested: Vec::new(),
      wait: WaitPolicy::default(),
    }
  }
}

/// Result of a successful bundle run.
#[derive(Debug)]
pub struct BundleReport {
  /// Where the artifact was written.
  pub artifact: PathBuf,
  /// Bundled paths in replay order.
  pub entries: Vec<String>,
  /// Size of the artifact in bytes.
  pub artifact_bytes: u64,
  pub variant: Variant,
}

/// Errors that can occur while bundling.
#[derive(Debug, Error)]
pub enum BundleError {
  #[error("output name must be a plain file name, got {name}")]
  InvalidOutputName { name: String },

  #[error("no files matched {}", requested.join(" "))]
  NoFilesMatched { requested: Vec<String> },

  #[error("failed to walk {}: {source}", path.display())]
  Walk { path: PathBuf, source: walkdir::Error },

  #[error("failed to read file {}: {source}", path.display())]
  ReadFile { path: PathBuf, source: io::Error },

  #[error("failed to write artifact {}: {source}", path.display())]
  WriteArtifact { path: PathBuf, source: io::Error },

  #[error("failed to canonicalize path {}: {source}", path.display())]
  Canonicalize { path: PathBuf, source: io::Error },

  #[error(transparent)]
  Artifact(#[from] ArtifactError),
}
