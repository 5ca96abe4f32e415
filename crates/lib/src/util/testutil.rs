//! Test utilities for instpack-lib.
//!
//! [`MemoryHost`] is an in-memory host runtime that records every primitive
//! the installer calls.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io;
use std::time::Duration;

use tokio::time::Instant;

use crate::bootstrap::{Host, HostError};

fn key(path: &str) -> String {
  path.trim_start_matches('/').to_string()
}

/// In-memory host. Time comes from tokio, so tests can pause the clock.
#[derive(Debug, Default)]
pub struct MemoryHost {
  files: RefCell<BTreeMap<String, String>>,
  /// A file that shows up once `ls` has been called the given number of times.
  pending: RefCell<Option<(String, String, usize)>>,
  pub reads: Cell<usize>,
  pub ls_calls: Cell<usize>,
  pub writes: usize,
  pub moves: Vec<(String, String)>,
  pub runs: Vec<String>,
  pub log: Vec<String>,
  pub terminal: Vec<String>,
  pub fail_writes: bool,
}

impl MemoryHost {
  pub fn with_files(files: &[(&str, &str)]) -> Self {
    let host = Self::default();
    for (path, content) in files {
      host.files.borrow_mut().insert(key(path), content.to_string());
    }
    host
  }

  /// Make `path` appear on the `calls`-th call to `ls`.
  pub fn appear_after(&mut self, path: &str, content: &str, calls: usize) {
    *self.pending.borrow_mut() = Some((key(path), content.to_string(), calls));
  }

  pub fn file(&self, path: &str) -> Option<String> {
    self.files.borrow().get(&key(path)).cloned()
  }
}

impl Host for MemoryHost {
  fn read(&self, path: &str) -> Result<Option<String>, HostError> {
    self.reads.set(self.reads.get() + 1);
    Ok(self.file(path))
  }

  fn write(&mut self, path: &str, content: &str) -> Result<(), HostError> {
    if self.fail_writes {
      return Err(HostError::Io {
        op: "write",
        path: path.to_string(),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only host"),
      });
    }
    self.writes += 1;
    self.files.borrow_mut().insert(key(path), content.to_string());
    Ok(())
  }

  fn ls(&self, _location: &str, name: &str) -> Result<Vec<String>, HostError> {
    let calls = self.ls_calls.get() + 1;
    self.ls_calls.set(calls);

    let due = matches!(&*self.pending.borrow(), Some((_, _, after)) if calls >= *after);
    if due && let Some((path, content, _)) = self.pending.borrow_mut().take() {
      self.files.borrow_mut().insert(path, content);
    }

    let needle = key(name);
    Ok(self.files.borrow().keys().filter(|k| k.contains(&needle)).cloned().collect())
  }

  fn mv(&mut self, _location: &str, from: &str, to: &str) -> Result<(), HostError> {
    let content = self
      .files
      .borrow_mut()
      .remove(&key(from))
      .ok_or_else(|| HostError::NotFound { path: from.to_string() })?;
    self.files.borrow_mut().insert(key(to), content);
    self.moves.push((key(from), key(to)));
    Ok(())
  }

  fn run(&mut self, path: &str) -> Result<(), HostError> {
    self.runs.push(key(path));
    Ok(())
  }

  async fn sleep(&mut self, duration: Duration) {
    tokio::time::sleep(duration).await;
  }

  fn now(&self) -> Instant {
    Instant::now()
  }

  fn log(&mut self, message: &str) {
    self.log.push(message.to_string());
  }

  fn tprint(&mut self, message: &str) {
    self.terminal.push(message.to_string());
  }
}
