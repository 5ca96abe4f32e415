//! The installer routine, run against a [`Host`].

use tracing::{debug, info, warn};

use crate::artifact::{DecodedArtifact, Variant};
use crate::consts::{UPDATE_LOCATION, WAIT_FLAG};
use crate::manifest::Manifest;

use super::host::{Host, same_name};
use super::types::{HostError, Note, Outcome, Summary, WaitPolicy};

/// A decoded installer, ready to run.
#[derive(Debug, Clone)]
pub struct Installer {
  variant: Variant,
  /// The installer's own file name on the host.
  self_name: String,
  wait: WaitPolicy,
  manifest: Manifest,
}

impl Installer {
  pub fn new(variant: Variant, self_name: impl Into<String>, wait: WaitPolicy, manifest: Manifest) -> Self {
    Self {
      variant,
      self_name: self_name.into(),
      wait,
      manifest,
    }
  }

  pub fn from_artifact(artifact: DecodedArtifact) -> Self {
    let wait = artifact.header.wait_policy();
    Self::new(artifact.header.variant, artifact.header.name, wait, artifact.manifest)
  }

  pub fn manifest(&self) -> &Manifest {
    &self.manifest
  }

  /// Run one invocation with the host's argument vector.
  ///
  /// `[WAIT_FLAG, candidate]` selects wait mode when the variant supports it;
  /// anything else replays the manifest.
  pub async fn run<H: Host>(&self, host: &mut H, args: &[String]) -> Result<Outcome, HostError> {
    if self.variant.supports_self_update() && args.first().map(String::as_str) == Some(WAIT_FLAG) {
      return self.wait_for_update(host, args.get(1).map(String::as_str)).await;
    }
    self.install(host).map(Outcome::Installed)
  }

  /// Normal mode: replay every entry in manifest order.
  ///
  /// A missing target counts as no prior content and is always written.
  pub fn install<H: Host>(&self, host: &mut H) -> Result<Summary, HostError> {
    let mut summary = Summary::default();

    for (path, content) in self.manifest.iter() {
      let unchanged = self.variant.skips_unchanged() && host.read(path)?.as_deref() == Some(content);
      if unchanged {
        debug!(path, "unchanged");
        summary.push(Note::Skipped(path.to_string()));
      } else {
        host.write(path, content)?;
        debug!(path, bytes = content.len(), "written");
        summary.push(Note::Written(path.to_string()));
      }
    }

    info!(
      written = summary.written(),
      skipped = summary.skipped(),
      "installer finished"
    );
    host.tprint(&summary.to_string());
    Ok(summary)
  }

  /// Wait mode: poll for `candidate` until the deadline.
  ///
  /// On success the candidate is moved over the installer's own name and run
  /// exactly once; polling stops. On timeout nothing is moved or run.
  pub async fn wait_for_update<H: Host>(&self, host: &mut H, candidate: Option<&str>) -> Result<Outcome, HostError> {
    let Some(candidate) = candidate else {
      host.tprint(&format!("WARNING: {} needs the name of the replacement file", WAIT_FLAG));
      return Ok(Outcome::MissingCandidate);
    };

    host.tprint(&format!("Waiting for {}...", candidate));
    let deadline = host.now() + self.wait.deadline;
    let mut polls = 0u32;

    loop {
      let found = host
        .ls(UPDATE_LOCATION, candidate)?
        .iter()
        .any(|name| same_name(name, candidate));

      if found {
        info!(candidate, polls, "replacement found");
        host.tprint(&format!("Found {}, replacing {}", candidate, self.self_name));
        host.mv(UPDATE_LOCATION, candidate, &self.self_name)?;
        host.run(&self.self_name)?;
        return Ok(Outcome::Replaced {
          candidate: candidate.to_string(),
        });
      }

      if host.now() >= deadline {
        warn!(candidate, polls, "timed out waiting for replacement");
        host.tprint(&format!("WARNING: Timed out waiting for {}", candidate));
        return Ok(Outcome::TimedOut {
          candidate: candidate.to_string(),
        });
      }

      polls += 1;
      host.log(&format!("Polling for {}", candidate));
      host.sleep(self.wait.poll_interval).await;
    }
  }
}
