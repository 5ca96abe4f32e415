//! Bootstrap routines embedded at the top of every artifact.
//!
//! Templates are host-runtime JavaScript. The self-update template carries
//! placeholders that are substituted with JSON literals at render time:
//! `{artifact_name}`, `{wait_flag}`, `{update_location}`, `{deadline_ms}` and `{poll_ms}`.
//!
//! Each template follows the same steps and messages as
//! [`Installer`](crate::bootstrap::Installer); changes to one must be made to
//! the other.

/// Writes every entry unconditionally.
pub const PLAIN_JS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/plain.js"));

/// Writes only entries whose current content differs.
pub const SKIP_UNCHANGED_JS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/skip-unchanged.js"));

/// Skip-unchanged replay plus the wait-for-update mode.
pub const SELF_UPDATE_JS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/self-update.js"));
