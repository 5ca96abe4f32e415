//! Installer bootstrap semantics.
//!
//! The generated artifact runs inside an external host runtime. This module is
//! the same routine expressed against the [`Host`] trait, so the behavior of
//! the generated code can be exercised locally and in tests:
//!
//! - normal mode replays the manifest, skipping unchanged files when the
//!   variant allows it, and reports one summary
//! - wait mode polls for a replacement artifact until a deadline, then moves
//!   it over the installer's own name and runs it once

mod host;
mod installer;
mod types;

pub use host::{Host, same_name};
pub use installer::Installer;
pub use types::{HostError, Note, Outcome, Summary, WaitPolicy};
