//! Artifact header, variants and errors.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bootstrap::WaitPolicy;
use crate::manifest::Manifest;

/// Bootstrap flavour embedded in an artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
  /// Write every file unconditionally.
  Plain,
  /// Skip files whose content already matches.
  SkipUnchanged,
  /// Skip-unchanged, plus wait-for-update self replacement.
  #[default]
  SelfUpdate,
}

impl Variant {
  pub fn as_str(self) -> &'static str {
    match self {
      Variant::Plain => "plain",
      Variant::SkipUnchanged => "skip-unchanged",
      Variant::SelfUpdate => "self-update",
    }
  }

  /// Whether the bootstrap compares before writing.
  pub fn skips_unchanged(self) -> bool {
    !matches!(self, Variant::Plain)
  }

  /// Whether the bootstrap understands the wait-for-update flag.
  pub fn supports_self_update(self) -> bool {
    matches!(self, Variant::SelfUpdate)
  }
}

impl fmt::Display for Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Metadata carried on the first line of every artifact.
///
/// ```text
/// // instpack {"variant":"self-update","name":"installer.js","wait_deadline_ms":10000,"poll_interval_ms":100}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactHeader {
  pub variant: Variant,
  /// The artifact's own file name; the self-update target.
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub wait_deadline_ms: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub poll_interval_ms: Option<u64>,
}

impl ArtifactHeader {
  /// Build a header. The wait policy is only recorded for variants that use it.
  pub fn new(variant: Variant, name: impl Into<String>, wait: WaitPolicy) -> Self {
    let (wait_deadline_ms, poll_interval_ms) = if variant.supports_self_update() {
      (Some(millis(wait.deadline)), Some(millis(wait.poll_interval)))
    } else {
      (None, None)
    };
    Self {
      variant,
      name: name.into(),
      wait_deadline_ms,
      poll_interval_ms,
    }
  }

  /// Wait policy baked into the artifact, falling back to defaults.
  pub fn wait_policy(&self) -> WaitPolicy {
    let defaults = WaitPolicy::default();
    WaitPolicy {
      deadline: self.wait_deadline_ms.map(Duration::from_millis).unwrap_or(defaults.deadline),
      poll_interval: self
        .poll_interval_ms
        .map(Duration::from_millis)
        .unwrap_or(defaults.poll_interval),
    }
  }
}

fn millis(d: Duration) -> u64 {
  u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// An artifact parsed back into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedArtifact {
  pub header: ArtifactHeader,
  pub manifest: Manifest,
}

/// Errors that can occur while rendering or decoding an artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
  #[error("artifact has no instpack header on its first line")]
  MissingHeader,

  #[error("artifact has no embedded data literal")]
  MissingData,

  #[error("invalid artifact header: {0}")]
  Header(#[source] serde_json::Error),

  #[error("invalid embedded data literal: {0}")]
  Data(#[source] serde_json::Error),

  #[error("failed to serialize manifest: {0}")]
  Serialize(#[source] serde_json::Error),
}
