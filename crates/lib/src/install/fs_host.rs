//! Host runtime backed by a local directory.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::bootstrap::{Host, HostError};
use crate::manifest::relative_key;

/// Maps host paths onto a directory. Models a single machine, so every
/// location resolves to the same root.
#[derive(Debug)]
pub struct FsHost {
  root: PathBuf,
  scheduled: Vec<String>,
  terminal: Vec<String>,
}

impl FsHost {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      scheduled: Vec::new(),
      terminal: Vec::new(),
    }
  }

  /// Resolve a host path below the root.
  pub fn host_path(&self, path: &str) -> Result<PathBuf, HostError> {
    let relative = Path::new(path.trim_start_matches('/'));
    let escapes = relative
      .components()
      .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes || relative.as_os_str().is_empty() {
      return Err(HostError::OutsideRoot { path: path.to_string() });
    }
    Ok(self.root.join(relative))
  }

  /// Pop the oldest script scheduled with `run`.
  pub fn take_scheduled(&mut self) -> Option<String> {
    if self.scheduled.is_empty() {
      None
    } else {
      Some(self.scheduled.remove(0))
    }
  }

  pub fn into_terminal(self) -> Vec<String> {
    self.terminal
  }
}

fn io_error(op: &'static str, path: &str, source: io::Error) -> HostError {
  HostError::Io {
    op,
    path: path.to_string(),
    source,
  }
}

impl Host for FsHost {
  fn read(&self, path: &str) -> Result<Option<String>, HostError> {
    let full = self.host_path(path)?;
    match fs::read_to_string(&full) {
      Ok(content) => Ok(Some(content)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(e) => Err(io_error("read", path, e)),
    }
  }

  fn write(&mut self, path: &str, content: &str) -> Result<(), HostError> {
    let full = self.host_path(path)?;
    if let Some(parent) = full.parent() {
      fs::create_dir_all(parent).map_err(|e| io_error("write", path, e))?;
    }
    fs::write(&full, content).map_err(|e| io_error("write", path, e))
  }

  fn ls(&self, location: &str, name: &str) -> Result<Vec<String>, HostError> {
    let needle = name.trim_start_matches('/');
    let mut matches = Vec::new();
    for entry in WalkDir::new(&self.root).sort_by_file_name() {
      let entry = entry.map_err(|e| io_error("ls", location, e.into()))?;
      if !entry.file_type().is_file() {
        continue;
      }
      let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
      if let Some(key) = relative_key(relative)
        && key.contains(needle)
      {
        matches.push(key);
      }
    }
    Ok(matches)
  }

  fn mv(&mut self, _location: &str, from: &str, to: &str) -> Result<(), HostError> {
    let source = self.host_path(from)?;
    let dest = self.host_path(to)?;
    match fs::rename(&source, &dest) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Err(HostError::NotFound { path: from.to_string() }),
      Err(e) => Err(io_error("mv", from, e)),
    }
  }

  fn run(&mut self, path: &str) -> Result<(), HostError> {
    debug!(path, "scheduled");
    self.scheduled.push(path.to_string());
    Ok(())
  }

  async fn sleep(&mut self, duration: Duration) {
    tokio::time::sleep(duration).await;
  }

  fn now(&self) -> Instant {
    Instant::now()
  }

  fn log(&mut self, message: &str) {
    debug!(message, "script log");
  }

  fn tprint(&mut self, message: &str) {
    info!(message, "terminal");
    self.terminal.push(message.to_string());
  }
}
