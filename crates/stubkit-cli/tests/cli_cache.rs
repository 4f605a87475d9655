use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn stubkit_cmd() -> Command {
    Command::cargo_bin("stubkit").unwrap()
}

#[test]
fn cache_stats_reports_location() {
    let tmp = TempDir::new().unwrap();

    stubkit_cmd()
        .current_dir(tmp.path())
        .args(["cache", "stats"])
        .assert()
        .success()
        .stderr(predicate::str::contains(".cache/pom"));
}

#[test]
fn cache_clean_removes_directory() {
    let tmp = TempDir::new().unwrap();
    let pom_dir = tmp.path().join(".cache/pom/com/example/lib/1.0");
    fs::create_dir_all(&pom_dir).unwrap();
    fs::write(pom_dir.join("lib-1.0.pom"), "<project/>").unwrap();

    stubkit_cmd()
        .current_dir(tmp.path())
        .args(["cache", "clean"])
        .assert()
        .success();

    assert!(!tmp.path().join(".cache/pom").exists());
}

#[test]
fn cache_clean_on_empty_cache_succeeds() {
    let tmp = TempDir::new().unwrap();

    stubkit_cmd()
        .current_dir(tmp.path())
        .args(["cache", "clean"])
        .assert()
        .success();
}
