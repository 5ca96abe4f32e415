//! Bootstrap outcome and error types.

use std::fmt;
use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::consts::{DEFAULT_POLL_INTERVAL, DEFAULT_WAIT_DEADLINE};

/// Timing of the wait-for-update loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
  /// How long to wait for a replacement before giving up.
  pub deadline: Duration,
  /// Suspension between two checks.
  pub poll_interval: Duration,
}

impl Default for WaitPolicy {
  fn default() -> Self {
    Self {
      deadline: DEFAULT_WAIT_DEADLINE,
      poll_interval: DEFAULT_POLL_INTERVAL,
    }
  }
}

/// What normal mode did with one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
  Skipped(String),
  Written(String),
}

impl fmt::Display for Note {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Note::Skipped(path) => write!(f, "Skipped {}", path),
      Note::Written(path) => write!(f, "Writing {}...", path),
    }
  }
}

/// Notes collected by one normal-mode run, in manifest order.
///
/// Displays as the notes joined with newlines, which is the single message
/// the installer reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
  notes: Vec<Note>,
}

impl Summary {
  pub fn push(&mut self, note: Note) {
    self.notes.push(note);
  }

  pub fn notes(&self) -> &[Note] {
    &self.notes
  }

  pub fn written(&self) -> usize {
    self.notes.iter().filter(|n| matches!(n, Note::Written(_))).count()
  }

  pub fn skipped(&self) -> usize {
    self.notes.iter().filter(|n| matches!(n, Note::Skipped(_))).count()
  }

  pub fn all_skipped(&self) -> bool {
    self.notes.iter().all(|n| matches!(n, Note::Skipped(_)))
  }
}

impl fmt::Display for Summary {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, note) in self.notes.iter().enumerate() {
      if i > 0 {
        f.write_str("\n")?;
      }
      write!(f, "{}", note)?;
    }
    Ok(())
  }
}

/// How an installer invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// Normal mode replayed the manifest.
  Installed(Summary),
  /// A replacement was found, moved over the installer and scheduled to run.
  Replaced { candidate: String },
  /// No replacement appeared before the deadline.
  TimedOut { candidate: String },
  /// Wait mode was requested without naming a replacement.
  MissingCandidate,
}

/// Failures raised by a host primitive.
///
/// The installer never catches or retries these.
#[derive(Debug, Error)]
pub enum HostError {
  #[error("{op} failed for {path}: {source}")]
  Io {
    op: &'static str,
    path: String,
    source: io::Error,
  },

  #[error("no such file: {path}")]
  NotFound { path: String },

  #[error("path escapes the host root: {path}")]
  OutsideRoot { path: String },
}
