//! Install command integration tests.

use std::fs;

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn install_writes_changed_and_skips_identical() {
  let env = TestEnv::with_sources(&[("a.js", "1"), ("dir/b.js", "2")]);
  env.bundle(&[]).success();
  env.write_home("a.js", "1");
  env.write_home("dir/b.js", "old");

  env
    .instpack_cmd()
    .arg("install")
    .arg(env.artifact_path())
    .arg("--target")
    .arg(env.home_path())
    .assert()
    .success()
    .stdout(predicate::str::contains("1 written, 1 skipped"));

  assert_eq!(env.read_home("dir/b.js"), "2");
  assert_eq!(env.read_home("a.js"), "1");
}

#[test]
fn install_twice_skips_everything() {
  let env = TestEnv::with_sources(&[("a.js", "1"), ("lib/heap.js", "heap")]);
  env.bundle(&[]).success();

  let install = || {
    env
      .instpack_cmd()
      .arg("install")
      .arg(env.artifact_path())
      .arg("--target")
      .arg(env.home_path())
      .assert()
      .success()
  };

  install().stdout(predicate::str::contains("2 written, 0 skipped"));
  install().stdout(predicate::str::contains("0 written, 2 skipped"));
}

#[test]
fn plain_variant_rewrites_everything() {
  let env = TestEnv::with_sources(&[("a.js", "1")]);
  env.bundle(&["--variant", "plain"]).success();
  env.write_home("a.js", "1");

  env
    .instpack_cmd()
    .arg("install")
    .arg(env.artifact_path())
    .arg("--target")
    .arg(env.home_path())
    .assert()
    .success()
    .stdout(predicate::str::contains("1 written, 0 skipped"));
}

#[test]
fn wait_for_update_replaces_installer() {
  let env = TestEnv::with_sources(&[("a.js", "v1")]);
  env.bundle(&[]).success();
  fs::copy(env.artifact_path(), env.home_path().join("installer.js")).unwrap();

  env.write_source("a.js", "v2");
  env.bundle(&[]).success();
  fs::copy(env.artifact_path(), env.home_path().join("new-installer.js")).unwrap();

  env
    .instpack_cmd()
    .arg("install")
    .arg(env.home_path().join("installer.js"))
    .arg("--target")
    .arg(env.home_path())
    .arg("--")
    .arg("--wait-for-update")
    .arg("new-installer.js")
    .assert()
    .success()
    .stdout(predicate::str::contains("replaced by new-installer.js"))
    .stdout(predicate::str::contains("1 written, 0 skipped"));

  assert_eq!(env.read_home("a.js"), "v2");
  assert!(!env.home_path().join("new-installer.js").exists());
}

#[test]
fn wait_for_update_times_out() {
  let env = TestEnv::with_sources(&[("a.js", "v1")]);
  env
    .bundle(&["--wait-deadline", "200ms", "--poll-interval", "20ms"])
    .success();

  env
    .instpack_cmd()
    .arg("install")
    .arg(env.artifact_path())
    .arg("--target")
    .arg(env.home_path())
    .arg("--")
    .arg("--wait-for-update")
    .arg("never.js")
    .assert()
    .success()
    .stderr(predicate::str::contains("Timed out waiting for never.js"));

  assert!(!env.home_path().join("a.js").exists());
}
