//! instpack-lib: Core types and logic for instpack
//!
//! This crate bundles a tree of host scripts into one self-installing artifact:
//! - `Manifest`: relative path to full text content, built once per bundle run
//! - `bundle`: walks a source tree, selects files and writes the artifact
//! - `artifact`: renders and decodes the generated installer script
//! - `bootstrap`: the installer's replay and self-update semantics, driven through a [`bootstrap::Host`]
//! - `install`: replays an artifact onto a local directory

pub mod artifact;
pub mod bootstrap;
pub mod bundle;
pub mod consts;
pub mod install;
pub mod manifest;
pub mod util;
