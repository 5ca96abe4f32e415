//! Bundle command integration tests.

use std::fs;

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn bundles_scripts_and_skips_tooling() {
  let env = TestEnv::with_sources(&[
    ("hack.js", "export async function main(ns) {}\n"),
    ("lib/heap.js", "export class Heap {}\n"),
    ("tools/bundler.js", "// tooling\n"),
    ("README.md", "# notes\n"),
  ]);

  env
    .bundle(&[])
    .success()
    .stdout(predicate::str::contains("/lib/heap.js"))
    .stdout(predicate::str::contains("Bundled 2 file(s)"))
    .stdout(predicate::str::contains("bundler.js").not());

  let text = fs::read_to_string(env.artifact_path()).unwrap();
  assert!(text.starts_with("// instpack {\"variant\":\"self-update\""));
  assert!(text.contains("var data = {"));
  assert!(!text.contains("// tooling"));
}

#[test]
fn rerun_overwrites_previous_artifact() {
  let env = TestEnv::with_sources(&[("a.js", "1")]);

  env.bundle(&[]).success();
  env.write_source("b.js", "2");
  env
    .bundle(&[])
    .success()
    .stdout(predicate::str::contains("Bundled 2 file(s)"));
}

#[test]
fn explicit_files_limit_the_bundle() {
  let env = TestEnv::with_sources(&[("a.js", "1"), ("dir/b.js", "2"), ("dir/c.js", "3")]);

  env
    .bundle(&["dir/b.js"])
    .success()
    .stdout(predicate::str::contains("Bundled 1 file(s)"))
    .stdout(predicate::str::contains("/dir/b.js"));
}

#[test]
fn unmatched_files_fail_and_keep_previous_artifact() {
  let env = TestEnv::with_sources(&[("a.js", "1")]);
  env.bundle(&[]).success();
  let before = fs::read_to_string(env.artifact_path()).unwrap();

  env
    .bundle(&["missing.js", "dir/gone.js"])
    .failure()
    .stderr(predicate::str::contains("no files matched missing.js dir/gone.js"));

  assert_eq!(fs::read_to_string(env.artifact_path()).unwrap(), before);
}

#[test]
fn unmatched_files_write_nothing_on_first_run() {
  let env = TestEnv::with_sources(&[("a.js", "1")]);

  env.bundle(&["missing.js"]).failure();

  assert!(!env.artifact_path().exists());
}

#[test]
fn custom_output_extension_and_variant() {
  let env = TestEnv::with_sources(&[("a.script", "1"), ("b.js", "2")]);

  env
    .bundle(&["--output", "setup.script", "--extension", ".script", "--variant", "plain"])
    .success()
    .stdout(predicate::str::contains("Bundled 1 file(s)"))
    .stdout(predicate::str::contains("plain"));

  let text = fs::read_to_string(env.src_path().join("setup.script")).unwrap();
  assert!(text.contains("\"a.script\":\"1\""));
  assert!(!text.contains("b.js"));
}

#[test]
fn invalid_duration_is_rejected() {
  let env = TestEnv::with_sources(&[("a.js", "1")]);

  env
    .bundle(&["--wait-deadline", "soon"])
    .failure()
    .stderr(predicate::str::contains("wait-deadline"));
}

#[test]
fn output_in_subdirectory_is_rejected() {
  let env = TestEnv::with_sources(&[("a.js", "1")]);

  env
    .bundle(&["--output", "dist/installer.js"])
    .failure()
    .stderr(predicate::str::contains("output name must be a plain file name"));

  assert!(!env.src_path().join("dist").exists());
}
