//! CLI integration tests.

mod bundle_tests;
mod common;
mod install_tests;
