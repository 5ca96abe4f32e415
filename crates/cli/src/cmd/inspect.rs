//! Implementation of the `instpack inspect` command.

use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use instpack_lib::artifact::Variant;
use instpack_lib::install::load_artifact;

use crate::output::{OutputFormat, format_bytes, print_json, print_stat, symbols};

#[derive(Debug, Serialize)]
struct InspectOutput {
  variant: Variant,
  name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  wait_deadline_ms: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  poll_interval_ms: Option<u64>,
  files: Vec<InspectFile>,
}

#[derive(Debug, Serialize)]
struct InspectFile {
  path: String,
  bytes: u64,
}

/// Execute the inspect command.
///
/// Decodes an artifact and lists its embedded files.
pub fn cmd_inspect(artifact: &Path, format: OutputFormat) -> Result<()> {
  let decoded = load_artifact(artifact).context("Failed to inspect artifact")?;

  let output = InspectOutput {
    variant: decoded.header.variant,
    name: decoded.header.name.clone(),
    wait_deadline_ms: decoded.header.wait_deadline_ms,
    poll_interval_ms: decoded.header.poll_interval_ms,
    files: decoded
      .manifest
      .iter()
      .map(|(path, content)| InspectFile {
        path: path.to_string(),
        bytes: content.len() as u64,
      })
      .collect(),
  };

  if format.is_json() {
    return print_json(&output);
  }

  println!("{} {}", symbols::INFO.cyan(), artifact.display().bold());
  print_stat("Name", &output.name);
  print_stat("Variant", output.variant.as_str());
  if let (Some(deadline), Some(poll)) = (output.wait_deadline_ms, output.poll_interval_ms) {
    print_stat("Wait", &format!("{}ms deadline, {}ms poll", deadline, poll));
  }
  print_stat(
    "Files",
    &format!(
      "{} ({})",
      output.files.len(),
      format_bytes(decoded.manifest.content_bytes())
    ),
  );
  println!();
  for file in &output.files {
    println!("  {} {}", file.path, format_bytes(file.bytes).dimmed());
  }

  Ok(())
}
