//! Implementation of the `instpack bundle` command.
//!
//! Walks the source tree and writes the installer artifact at its root.

use std::time::Instant;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use instpack_lib::bundle::{BundleOptions, bundle};

use crate::output::{format_bytes, format_duration, print_info, print_stat, print_success, symbols};

/// Execute the bundle command.
///
/// Prints one line per bundled file followed by the artifact size.
///
/// # Errors
///
/// Fails without touching the artifact when explicit files were requested
/// and none of them matched.
pub fn cmd_bundle(options: &BundleOptions) -> Result<()> {
  let start = Instant::now();
  print_info(&format!("Writing to {}...", options.output_name));

  let report = bundle(options).context("Bundle failed")?;

  for entry in &report.entries {
    println!("  {} {}", symbols::ADD.green(), entry);
  }

  print_success(&format!(
    "Bundled {} file(s) into {}",
    report.entries.len(),
    report.artifact.display()
  ));
  print_stat("Variant", report.variant.as_str());
  print_stat("Size", &format_bytes(report.artifact_bytes));
  print_stat("Duration", &format_duration(start.elapsed()));

  Ok(())
}
