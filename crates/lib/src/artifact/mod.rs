//! Generated installer artifacts.
//!
//! An artifact is a single host script laid out as:
//!
//! ```text
//! // instpack {header json}
//! <bootstrap routine for the variant>
//! var data = {manifest json}
//! ```
//!
//! The manifest literal is plain JSON with non-ASCII characters left
//! unescaped, so every file's content round-trips character for character.

mod templates;
mod types;

use crate::consts::{DATA_PREFIX, HEADER_PREFIX, UPDATE_LOCATION, WAIT_FLAG};
use crate::manifest::Manifest;

pub use templates::{PLAIN_JS, SELF_UPDATE_JS, SKIP_UNCHANGED_JS};
pub use types::{ArtifactError, ArtifactHeader, DecodedArtifact, Variant};

/// Bootstrap routine for a variant with its placeholders filled in.
pub fn bootstrap_source(header: &ArtifactHeader) -> Result<String, ArtifactError> {
  let source = match header.variant {
    Variant::Plain => PLAIN_JS.to_string(),
    Variant::SkipUnchanged => SKIP_UNCHANGED_JS.to_string(),
    Variant::SelfUpdate => {
      let wait = header.wait_policy();
      SELF_UPDATE_JS
        .replace("{artifact_name}", &js_string(&header.name)?)
        .replace("{wait_flag}", &js_string(WAIT_FLAG)?)
        .replace("{update_location}", &js_string(UPDATE_LOCATION)?)
        .replace("{deadline_ms}", &wait.deadline.as_millis().to_string())
        .replace("{poll_ms}", &wait.poll_interval.as_millis().to_string())
    }
  };
  Ok(source)
}

/// Render the complete artifact text.
///
/// The whole artifact is produced in memory; callers write it in one step.
pub fn render(manifest: &Manifest, header: &ArtifactHeader) -> Result<String, ArtifactError> {
  let header_json = serde_json::to_string(header).map_err(ArtifactError::Serialize)?;
  let data = serde_json::to_string(manifest).map_err(ArtifactError::Serialize)?;
  let bootstrap = bootstrap_source(header)?;

  let mut out = String::with_capacity(bootstrap.len() + data.len() + header_json.len() + 32);
  out.push_str(HEADER_PREFIX);
  out.push_str(&header_json);
  out.push('\n');
  out.push_str(&bootstrap);
  out.push_str(DATA_PREFIX);
  out.push_str(&data);
  out.push('\n');
  Ok(out)
}

/// Parse an artifact back into its header and manifest.
pub fn decode(text: &str) -> Result<DecodedArtifact, ArtifactError> {
  let first_line = text.lines().next().ok_or(ArtifactError::MissingHeader)?;
  let header_json = first_line
    .strip_prefix(HEADER_PREFIX)
    .ok_or(ArtifactError::MissingHeader)?;
  let header: ArtifactHeader = serde_json::from_str(header_json).map_err(ArtifactError::Header)?;

  // JSON escapes raw newlines, so the last marker is always the real one
  let marker = format!("\n{DATA_PREFIX}");
  let start = text.rfind(&marker).ok_or(ArtifactError::MissingData)? + marker.len();
  let manifest: Manifest = serde_json::from_str(text[start..].trim_end()).map_err(ArtifactError::Data)?;

  Ok(DecodedArtifact { header, manifest })
}

fn js_string(value: &str) -> Result<String, ArtifactError> {
  serde_json::to_string(value).map_err(ArtifactError::Serialize)
}
