//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary directory with a source tree under `src/`
/// and a host directory under `home/`.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Create an empty test environment.
  pub fn empty() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Create an environment whose source tree holds the given files.
  pub fn with_sources(files: &[(&str, &str)]) -> Self {
    let env = Self::empty();
    for (path, content) in files {
      env.write_source(path, content);
    }
    env
  }

  /// Write a file relative to the source tree.
  pub fn write_source(&self, relative_path: &str, content: &str) {
    write(&self.src_path(), relative_path, content);
  }

  /// Write a file relative to the host directory.
  pub fn write_home(&self, relative_path: &str, content: &str) {
    write(&self.home_path(), relative_path, content);
  }

  /// Source tree to bundle.
  pub fn src_path(&self) -> PathBuf {
    let p = self.temp.path().join("src");
    std::fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Directory standing in for the host file system.
  pub fn home_path(&self) -> PathBuf {
    let p = self.temp.path().join("home");
    std::fs::create_dir_all(&p).unwrap();
    dunce::canonicalize(&p).unwrap_or(p)
  }

  /// Artifact written by `bundle` with default options.
  pub fn artifact_path(&self) -> PathBuf {
    self.src_path().join("installer.js")
  }

  pub fn read_home(&self, relative_path: &str) -> String {
    std::fs::read_to_string(self.home_path().join(relative_path)).unwrap()
  }

  /// Get a Command for the instpack binary.
  pub fn instpack_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("instpack");
    cmd.env_remove("RUST_LOG");
    cmd
  }

  /// Run `bundle` against the source tree with extra arguments.
  pub fn bundle(&self, args: &[&str]) -> assert_cmd::assert::Assert {
    self
      .instpack_cmd()
      .arg("bundle")
      .arg("--root")
      .arg(self.src_path())
      .args(args)
      .assert()
  }
}

fn write(root: &Path, relative_path: &str, content: &str) {
  let path = root.join(relative_path);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent).unwrap();
  }
  std::fs::write(&path, content).unwrap();
}
