// Integration tests for the sustainassess CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the sustainassess binary.
fn sustainassess() -> Command {
    let mut cmd = Command::cargo_bin("sustainassess").expect("binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    sustainassess()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sustainassess"));
}

#[test]
fn cli_help_flag() {
    sustainassess()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("self-assessment"));
}

#[test]
fn score_requires_file() {
    sustainassess()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_and_verbose_conflict() {
    sustainassess()
        .args(["-q", "-v", "schema"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn schema_lists_both_programs() {
    sustainassess()
        .args(["-q", "schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# MAF (8 categorias, 28 perguntas)"))
        .stdout(predicate::str::contains("# IKI (14 categorias, 35 perguntas)"));
}

#[test]
fn schema_filters_by_program() {
    sustainassess()
        .args(["-q", "schema", "--program", "maf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("maf_c8"))
        .stdout(predicate::str::contains("IKI").not());
}

#[test]
fn validate_reports_iki_weight_sum_as_blocking() {
    sustainassess()
        .args(["-q", "validate"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("[BLOCKING] schema.weight_sum"))
        .stdout(predicate::str::contains("IKI category weights must sum to 1.0 (found 1.200)"));
}

#[test]
fn schema_defects_are_logged_at_startup() {
    sustainassess()
        .arg("schema")
        .assert()
        .success()
        .stderr(predicate::str::contains("IKI category weights must sum to 1.0"));
}
