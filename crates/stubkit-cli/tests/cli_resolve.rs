use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(deprecated)]
fn stubkit_cmd() -> Command {
    Command::cargo_bin("stubkit").unwrap()
}

/// Write a config that disables all mirrors so runs are fully offline and
/// served from the seeded POM cache.
fn write_offline_config(root: &Path) {
    fs::write(
        root.join("stubkit.toml"),
        "repositories = []\ncache-dir = \".cache/pom\"\n",
    )
    .unwrap();
}

/// Plant a POM in the cache the way a previous run would have written it.
fn seed_pom(root: &Path, group: &str, artifact: &str, version: &str, deps: &str) {
    let dir = root
        .join(".cache/pom")
        .join(group.replace('.', "/"))
        .join(artifact)
        .join(version);
    fs::create_dir_all(&dir).unwrap();
    let xml = format!(
        r#"<?xml version="1.0"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <groupId>{group}</groupId>
  <artifactId>{artifact}</artifactId>
  <version>{version}</version>
  <dependencies>{deps}</dependencies>
</project>"#
    );
    fs::write(dir.join(format!("{artifact}-{version}.pom")), xml).unwrap();
}

#[test]
fn resolve_missing_base_file_fails() {
    let tmp = TempDir::new().unwrap();

    stubkit_cmd()
        .current_dir(tmp.path())
        .args(["resolve", "--base", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn resolve_writes_ordered_output_from_cache() {
    let tmp = TempDir::new().unwrap();
    write_offline_config(tmp.path());

    fs::write(
        tmp.path().join("packages-0-base.txt"),
        "# seed list\nandroid-35\ncom.example:lib:1.0.0\n",
    )
    .unwrap();

    seed_pom(
        tmp.path(),
        "com.example",
        "lib",
        "1.0.0",
        r#"
    <dependency><groupId>com.example</groupId><artifactId>util</artifactId><version>[2.0.0]</version></dependency>
    <dependency><groupId>com.example</groupId><artifactId>harness</artifactId><version>3.0.0</version><scope>test</scope></dependency>"#,
    );
    seed_pom(tmp.path(), "com.example", "util", "2.0.0", "");

    stubkit_cmd()
        .current_dir(tmp.path())
        .arg("resolve")
        .assert()
        .success();

    let out = fs::read_to_string(tmp.path().join("packages-1-resolved.txt")).unwrap();
    assert_eq!(
        out,
        "android-35\ncom.example:lib:1.0.0\ncom.example:util:2.0.0\n"
    );
}

#[test]
fn resolve_skips_malformed_seed_lines() {
    let tmp = TempDir::new().unwrap();
    write_offline_config(tmp.path());

    fs::write(
        tmp.path().join("packages-0-base.txt"),
        "android-34\nnot a coordinate\ntoo:few\n",
    )
    .unwrap();

    stubkit_cmd()
        .current_dir(tmp.path())
        .arg("resolve")
        .assert()
        .success();

    let out = fs::read_to_string(tmp.path().join("packages-1-resolved.txt")).unwrap();
    assert_eq!(out, "android-34\n");
}

#[test]
fn resolved_output_is_itself_a_valid_packages_file() {
    let tmp = TempDir::new().unwrap();
    write_offline_config(tmp.path());

    fs::write(
        tmp.path().join("packages-0-base.txt"),
        "android-35\ncom.example:lib:1.0.0\n",
    )
    .unwrap();
    seed_pom(tmp.path(), "com.example", "lib", "1.0.0", "");

    stubkit_cmd()
        .current_dir(tmp.path())
        .arg("resolve")
        .assert()
        .success();

    let out = fs::read_to_string(tmp.path().join("packages-1-resolved.txt")).unwrap();
    let parsed = stubkit_core::packages::parse_packages(&out);
    assert_eq!(parsed.len(), 2, "every output line parses back: {out:?}");
}

#[test]
fn resolve_honors_custom_paths() {
    let tmp = TempDir::new().unwrap();
    write_offline_config(tmp.path());

    fs::write(tmp.path().join("seeds.txt"), "android-33\n").unwrap();

    stubkit_cmd()
        .current_dir(tmp.path())
        .args(["resolve", "--base", "seeds.txt", "--out", "resolved.txt"])
        .assert()
        .success();

    assert!(tmp.path().join("resolved.txt").is_file());
    assert!(!tmp.path().join("packages-1-resolved.txt").exists());
}
