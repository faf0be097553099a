use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_help_mentions_dry_run() {
    let mut cmd = Command::cargo_bin("dist-release").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("dist branch"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let mut cmd = Command::cargo_bin("dist-release").unwrap();
    cmd.arg("--branch=develop").assert().failure();
}

#[test]
fn test_outside_repository_fails() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("dist-release").unwrap();
    cmd.current_dir(dir.path())
        .env("GIT_CEILING_DIRECTORIES", dir.path().parent().unwrap())
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Git repository error"));
}

#[test]
fn test_dirty_tree_fails_without_touching_build_dir() {
    let dir = TempDir::new().unwrap();
    git2::Repository::init(dir.path()).unwrap();
    fs::write(dir.path().join("package.json"), r#"{ "version": "1.2.0" }"#).unwrap();
    // Keeps the user's own config file out of the lookup
    fs::write(dir.path().join("release.toml"), "").unwrap();
    fs::create_dir(dir.path().join("dist")).unwrap();
    fs::write(dir.path().join("dist/index.js"), "built").unwrap();

    let mut cmd = Command::cargo_bin("dist-release").unwrap();
    cmd.current_dir(dir.path())
        .arg("--dry-run")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Doing sanity checks..."))
        .stderr(predicate::str::contains("Must have clean working tree"));

    assert!(dir.path().join("dist/index.js").exists());
}
