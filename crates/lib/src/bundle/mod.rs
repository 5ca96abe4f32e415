//! Build an installer artifact from a source tree.
//!
//! This module provides the core logic for the `instpack bundle` command:
//! - walks the root, pruning the top-level tooling directory
//! - selects files by extension and optional allow-list, never the artifact itself
//! - renders the bootstrap for the chosen variant plus the manifest literal
//! - replaces the artifact in one step, only after the manifest is complete

mod types;
mod walk;

use std::path::{Component, Path};

use tracing::info;

use crate::artifact::{self, ArtifactHeader};
use crate::util::fs::write_atomic;

pub use types::{BundleError, BundleOptions, BundleReport};
pub use walk::{Selection, collect};

/// Bundle `options.root` into `options.root/options.output_name`.
///
/// # Errors
///
/// Returns [`BundleError::InvalidOutputName`] when the output name is not a
/// single file name, and [`BundleError::NoFilesMatched`] when an allow-list was given and
/// nothing matched; the artifact is left untouched in that case. Walk, read
/// and write failures propagate as I/O errors.
pub fn bundle(options: &BundleOptions) -> Result<BundleReport, BundleError> {
  if !is_plain_file_name(&options.output_name) {
    return Err(BundleError::InvalidOutputName {
      name: options.output_name.clone(),
    });
  }

  let root = dunce::canonicalize(&options.root).map_err(|e| BundleError::Canonicalize {
    path: options.root.clone(),
    source: e,
  })?;

  let selection = Selection::new(
    &options.extension,
    &options.output_name,
    options.tooling_dir.as_deref(),
    &options.requested,
  );
  let manifest = collect(&root, &selection)?;

  if selection.has_allow_list() && manifest.is_empty() {
    return Err(BundleError::NoFilesMatched {
      requested: options.requested.clone(),
    });
  }

  let header = ArtifactHeader::new(options.variant, options.output_name.clone(), options.wait);
  let text = artifact::render(&manifest, &header)?;

  let artifact_path = root.join(&options.output_name);
  info!(
    path = %artifact_path.display(),
    files = manifest.len(),
    variant = %options.variant,
    "writing artifact"
  );
  write_atomic(&artifact_path, &text).map_err(|e| BundleError::WriteArtifact {
    path: artifact_path.clone(),
    source: e,
  })?;

  Ok(BundleReport {
    artifact: artifact_path,
    entries: manifest.paths().map(str::to_string).collect(),
    artifact_bytes: text.len() as u64,
    variant: options.variant,
  })
}

/// The artifact lives directly under the root and is excluded by file name,
/// so its name must be exactly one normal path component.
fn is_plain_file_name(name: &str) -> bool {
  let mut components = Path::new(name).components();
  matches!(
    (components.next(), components.next()),
    (Some(Component::Normal(_)), None)
  ) && !name.contains(['/', '\\'])
}
