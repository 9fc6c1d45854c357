//! End-to-end checks of the `pycmirror` binary's validation surface.
//!
//! These tests exercise only paths that fail before the compile step, so
//! they do not require a Python interpreter on the test host.

use assert_cmd::Command;
use std::fs;

fn pycmirror() -> Command {
    Command::cargo_bin("pycmirror").expect("binary builds")
}

#[test]
fn no_arguments_is_a_usage_error() {
    pycmirror().assert().failure().code(1);
}

#[test]
fn help_succeeds() {
    pycmirror()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage"));
}

#[test]
fn missing_source_reports_a_descriptive_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    pycmirror()
        .arg(tmp.path().join("missing"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("does not exist as a directory"));
}

#[test]
fn destination_nested_in_source_is_rejected_without_mutation() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("proj");
    fs::create_dir(&source).expect("source");
    let nested = source.join("out");

    pycmirror()
        .arg(&source)
        .arg("-d")
        .arg(&nested)
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("lies inside source"));

    assert!(!nested.exists());
}

#[test]
fn bad_exclude_regex_is_rejected() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let source = tmp.path().join("proj");
    fs::create_dir(&source).expect("source");

    pycmirror()
        .arg(&source)
        .arg("-d")
        .arg(tmp.path().join("out"))
        .arg("-e")
        .arg("(unclosed")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("failed to compile filter pattern"));
}
