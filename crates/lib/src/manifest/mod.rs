//! Manifest of bundled files.
//!
//! A manifest maps host-independent relative paths to the full text content
//! of each bundled file. It is built once per bundle run and embedded verbatim
//! in the generated artifact.

mod path;
mod types;

pub use path::{normalize_requested, relative_key};
pub use types::*;
