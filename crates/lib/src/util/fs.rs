//! Filesystem helpers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Replace `path` with `content` in one step.
///
/// Writes to a sibling temp file, then renames it over the destination, so
/// readers see either the old file or the complete new one.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
  let temp_path = temp_sibling(path);
  fs::write(&temp_path, content)?;
  if let Err(e) = fs::rename(&temp_path, path) {
    let _ = fs::remove_file(&temp_path);
    return Err(e);
  }
  Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
  let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
  name.push(".tmp");
  path.with_file_name(name)
}
