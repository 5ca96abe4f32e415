//! Shared utilities.
//!
//! Atomic file replacement and test helpers.

pub mod fs;

#[cfg(test)]
pub mod testutil;
