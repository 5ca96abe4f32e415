//! Replay an artifact onto a local directory.
//!
//! Runs the installer against an [`FsHost`] rooted at the target directory.
//! Scripts the installer schedules with `run` are decoded from the target
//! and executed afterwards, in order, with no arguments.

mod fs_host;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::artifact::{self, ArtifactError, DecodedArtifact};
use crate::bootstrap::{HostError, Installer, Outcome};

pub use fs_host::FsHost;

/// Options for a local replay.
#[derive(Debug, Clone)]
pub struct InstallOptions {
  /// Directory standing in for the host's file system.
  pub target: PathBuf,
  /// Argument vector passed to the first invocation.
  pub args: Vec<String>,
}

/// One installer invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
  pub script: String,
  pub outcome: Outcome,
}

/// Result of a local replay.
#[derive(Debug)]
pub struct InstallReport {
  /// Every invocation in execution order.
  pub runs: Vec<RunRecord>,
  /// Terminal output of all invocations.
  pub terminal: Vec<String>,
}

/// Errors that can occur during a local replay.
#[derive(Debug, Error)]
pub enum InstallError {
  #[error("failed to read artifact {}: {source}", path.display())]
  ReadArtifact { path: PathBuf, source: io::Error },

  #[error("failed to decode artifact {}: {source}", path.display())]
  Artifact { path: PathBuf, source: ArtifactError },

  #[error("failed to create target directory {}: {source}", path.display())]
  CreateTarget { path: PathBuf, source: io::Error },

  #[error(transparent)]
  Host(#[from] HostError),
}

/// Read and decode an artifact file.
pub fn load_artifact(path: &Path) -> Result<DecodedArtifact, InstallError> {
  let text = fs::read_to_string(path).map_err(|e| InstallError::ReadArtifact {
    path: path.to_path_buf(),
    source: e,
  })?;
  artifact::decode(&text).map_err(|e| InstallError::Artifact {
    path: path.to_path_buf(),
    source: e,
  })
}

/// Replay the artifact at `artifact_path` onto `options.target`.
pub async fn install_artifact(artifact_path: &Path, options: &InstallOptions) -> Result<InstallReport, InstallError> {
  fs::create_dir_all(&options.target).map_err(|e| InstallError::CreateTarget {
    path: options.target.clone(),
    source: e,
  })?;

  let mut host = FsHost::new(&options.target);
  let mut runs = Vec::new();

  let installer = Installer::from_artifact(load_artifact(artifact_path)?);
  info!(
    artifact = %artifact_path.display(),
    target = %options.target.display(),
    files = installer.manifest().len(),
    "running installer"
  );
  let outcome = installer.run(&mut host, &options.args).await?;
  runs.push(RunRecord {
    script: artifact_path.display().to_string(),
    outcome,
  });

  // Re-executions run without arguments, so they never schedule further runs
  while let Some(script) = host.take_scheduled() {
    let path = host.host_path(&script)?;
    let installer = Installer::from_artifact(load_artifact(&path)?);
    info!(script = %script, "re-running replaced installer");
    let outcome = installer.run(&mut host, &[]).await?;
    runs.push(RunRecord { script, outcome });
  }

  Ok(InstallReport {
    runs,
    terminal: host.into_terminal(),
  })
}
