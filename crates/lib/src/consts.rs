//! Shared constants.

use std::time::Duration;

pub const APP_NAME: &str = "instpack";

/// File name of the generated artifact, relative to the bundle root.
pub const DEFAULT_ARTIFACT_NAME: &str = "installer.js";

/// Only files ending with this are bundled.
pub const DEFAULT_EXTENSION: &str = ".js";

/// Top-level directory holding build tooling. Never walked.
pub const DEFAULT_TOOLING_DIR: &str = "tools";

/// First argument that switches the bootstrap into self-update wait mode.
pub const WAIT_FLAG: &str = "--wait-for-update";

/// Host location polled for a replacement artifact.
pub const UPDATE_LOCATION: &str = "home";

pub const DEFAULT_WAIT_DEADLINE: Duration = Duration::from_secs(10);

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Prefix of the header comment on the first line of every artifact.
pub const HEADER_PREFIX: &str = "// instpack ";

/// Assignment that introduces the embedded manifest literal.
pub const DATA_PREFIX: &str = "var data = ";
