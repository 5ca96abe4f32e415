//! Implementation of the `instpack install` command.
//!
//! Replays an artifact onto a local directory that stands in for the host.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use instpack_lib::bootstrap::Outcome;
use instpack_lib::install::{InstallOptions, install_artifact};

use crate::output::{print_note, print_success, print_warning};

/// Execute the install command.
///
/// `args` is the installer's argument vector, e.g.
/// `["--wait-for-update", "new-installer.js"]`.
pub fn cmd_install(artifact: &Path, target: &Path, args: Vec<String>) -> Result<()> {
  let options = InstallOptions {
    target: target.to_path_buf(),
    args,
  };

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let report = rt
    .block_on(install_artifact(artifact, &options))
    .context("Install failed")?;

  for run in &report.runs {
    match &run.outcome {
      Outcome::Installed(summary) => {
        for note in summary.notes() {
          print_note(note);
        }
        print_success(&format!(
          "{}: {} written, {} skipped",
          run.script,
          summary.written(),
          summary.skipped()
        ));
      }
      Outcome::Replaced { candidate } => {
        print_success(&format!("{}: replaced by {}", run.script, candidate));
      }
      Outcome::TimedOut { candidate } => {
        print_warning(&format!("Timed out waiting for {}", candidate));
      }
      Outcome::MissingCandidate => {
        print_warning("Wait mode needs the name of the replacement file");
      }
    }
  }

  info!(runs = report.runs.len(), target = %target.display(), "install finished");

  Ok(())
}
