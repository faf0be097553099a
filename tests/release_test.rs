use std::cell::RefCell;
use std::fs;
use std::path::Path;

use dist_release::config::ReleaseConfig;
use dist_release::executor::CommandRunner;
use dist_release::git::MockRepository;
use dist_release::precondition::Precondition;
use dist_release::release::{Release, ReleaseOptions};
use dist_release::{ReleaseError, Result};
use tempfile::TempDir;

/// Records every command instead of running it; optionally fails on one.
#[derive(Default)]
struct RecordingRunner {
    commands: RefCell<Vec<String>>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    fn failing_on(command: &str) -> Self {
        RecordingRunner {
            commands: RefCell::new(Vec::new()),
            fail_on: Some(command.to_string()),
        }
    }

    fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str) -> Result<()> {
        self.commands.borrow_mut().push(command.to_string());
        if self.fail_on.as_deref() == Some(command) {
            return Err(ReleaseError::command_failed(command, "exit status: 1"));
        }
        Ok(())
    }
}

// Project with a manifest at 1.2.0, an ignore file and a stale build output
fn setup_project() -> TempDir {
    let dir = TempDir::new().expect("Could not create temp dir");
    fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "demo", "version": "1.2.0" }"#,
    )
    .unwrap();
    fs::write(dir.path().join(".gitignore"), "node_modules\ndist\n").unwrap();
    fs::create_dir(dir.path().join("dist")).unwrap();
    fs::write(dir.path().join("dist/index.js"), "stale").unwrap();
    dir
}

fn run(
    dir: &Path,
    repo: &MockRepository,
    runner: &RecordingRunner,
    dry_run: bool,
) -> Result<dist_release::release::ReleaseReport> {
    let config = ReleaseConfig::default();
    Release::new(&config, repo, runner, dir, ReleaseOptions { dry_run }).run()
}

#[test]
#[cfg(unix)]
fn test_full_release_sequence() {
    let dir = setup_project();
    let repo = MockRepository::on_branch("master").with_tag("v1.1.0");
    let runner = RecordingRunner::default();

    let report = run(dir.path(), &repo, &runner, false).unwrap();

    assert_eq!(
        runner.commands(),
        vec![
            "git checkout 'dist'",
            "git merge 'master'",
            "npm run build",
            "npm run check",
            "npm publish",
            "git add 'dist/'",
            "git commit -m 'Release v1.2.0'",
            "git reset --hard HEAD",
            "git tag 'v1.2.0'",
            "git push 'origin' 'dist:dist' --tags",
            "git checkout 'master'",
        ]
    );
    assert_eq!(report.tag, "v1.2.0");
    assert_eq!(report.release_branch, "master");
    assert!(report.published);
    assert!(report.pushed);
}

#[test]
fn test_release_removes_build_dir_and_strips_ignore_entry() {
    let dir = setup_project();
    let repo = MockRepository::default();
    let runner = RecordingRunner::default();

    run(dir.path(), &repo, &runner, false).unwrap();

    // The recorder never builds nor resets, so both edits stay visible
    assert!(!dir.path().join("dist").exists());
    assert_eq!(
        fs::read_to_string(dir.path().join(".gitignore")).unwrap(),
        "node_modules\n"
    );
}

#[test]
#[cfg(unix)]
fn test_dry_run_skips_publish_and_push() {
    let dir = setup_project();
    let repo = MockRepository::on_branch("feature/docs");
    let runner = RecordingRunner::default();

    let report = run(dir.path(), &repo, &runner, true).unwrap();

    let commands = runner.commands();
    assert!(!commands.contains(&"npm publish".to_string()));
    assert!(!commands.iter().any(|c| c.starts_with("git push")));
    assert!(commands.contains(&"npm run build".to_string()));
    assert!(commands.contains(&"npm run check".to_string()));
    assert!(commands.contains(&"git commit -m 'Release v1.2.0'".to_string()));
    assert!(commands.contains(&"git tag 'v1.2.0'".to_string()));
    assert_eq!(
        commands.last().map(String::as_str),
        Some("git checkout 'feature/docs'")
    );
    assert!(!report.published);
    assert!(!report.pushed);
}

#[test]
fn test_dirty_tree_aborts_before_side_effects() {
    let dir = setup_project();
    let repo = MockRepository::default().dirty();
    let runner = RecordingRunner::default();

    let err = run(dir.path(), &repo, &runner, false).unwrap_err();

    assert!(matches!(
        err,
        ReleaseError::Precondition(Precondition::DirtyWorkingTree)
    ));
    assert!(err.to_string().contains("clean working tree"));
    assert!(runner.commands().is_empty());
    assert!(dir.path().join("dist/index.js").exists());
}

#[test]
fn test_dirty_tree_aborts_in_dry_run() {
    let dir = setup_project();
    let repo = MockRepository::on_branch("develop").dirty();
    let runner = RecordingRunner::default();

    let err = run(dir.path(), &repo, &runner, true).unwrap_err();

    assert!(err.is_precondition());
    assert!(runner.commands().is_empty());
    assert!(dir.path().join("dist").exists());
}

#[test]
fn test_wrong_branch_aborts_before_side_effects() {
    let dir = setup_project();
    let repo = MockRepository::on_branch("develop");
    let runner = RecordingRunner::default();

    let err = run(dir.path(), &repo, &runner, false).unwrap_err();

    assert!(matches!(
        err,
        ReleaseError::Precondition(Precondition::WrongBranch { .. })
    ));
    assert!(runner.commands().is_empty());
    assert!(dir.path().join("dist").exists());
}

#[test]
fn test_duplicate_tag_aborts_before_side_effects() {
    let dir = setup_project();
    let repo = MockRepository::default().with_tag("v1.2.0");
    let runner = RecordingRunner::default();

    let err = run(dir.path(), &repo, &runner, true).unwrap_err();

    assert!(matches!(
        err,
        ReleaseError::Precondition(Precondition::DuplicateTag { .. })
    ));
    assert!(runner.commands().is_empty());
    assert!(dir.path().join("dist").exists());
}

#[test]
#[cfg(unix)]
fn test_failing_command_stops_the_sequence() {
    let dir = setup_project();
    let repo = MockRepository::default();
    let runner = RecordingRunner::failing_on("npm run check");

    let err = run(dir.path(), &repo, &runner, false).unwrap_err();

    assert!(matches!(err, ReleaseError::CommandFailed { .. }));
    assert_eq!(
        runner.commands(),
        vec![
            "git checkout 'dist'",
            "git merge 'master'",
            "npm run build",
            "npm run check",
        ]
    );
    // No compensation: the ignore file was never touched
    assert_eq!(
        fs::read_to_string(dir.path().join(".gitignore")).unwrap(),
        "node_modules\ndist\n"
    );
}

#[test]
#[cfg(unix)]
fn test_failing_add_skips_commit() {
    let dir = setup_project();
    let repo = MockRepository::default();
    let runner = RecordingRunner::failing_on("git add 'dist/'");

    run(dir.path(), &repo, &runner, false).unwrap_err();

    let commands = runner.commands();
    assert_eq!(commands.last().map(String::as_str), Some("git add 'dist/'"));
    assert!(!commands.iter().any(|c| c.starts_with("git commit")));
}

#[test]
fn test_missing_manifest_is_io_error() {
    let dir = setup_project();
    fs::remove_file(dir.path().join("package.json")).unwrap();
    let repo = MockRepository::default();
    let runner = RecordingRunner::default();

    let err = run(dir.path(), &repo, &runner, false).unwrap_err();

    assert!(matches!(err, ReleaseError::Io(_)));
    assert!(runner.commands().is_empty());
}

#[test]
fn test_missing_build_dir_is_fine() {
    let dir = setup_project();
    fs::remove_dir_all(dir.path().join("dist")).unwrap();
    let repo = MockRepository::default();
    let runner = RecordingRunner::default();

    assert!(run(dir.path(), &repo, &runner, false).is_ok());
}

#[test]
fn test_prepare_builds_context() {
    let dir = setup_project();
    let repo = MockRepository::on_branch("master").with_tag("v1.0.0");
    let runner = RecordingRunner::default();
    let config = ReleaseConfig::default();

    let ctx = Release::new(&config, &repo, &runner, dir.path(), ReleaseOptions::default())
        .prepare()
        .unwrap();

    assert_eq!(ctx.version, "1.2.0");
    assert_eq!(ctx.tag, "v1.2.0");
    assert_eq!(ctx.current_branch, "master");
    assert!(ctx.working_tree_clean);
    assert!(!ctx.dry_run);
    assert!(ctx.existing_tags.contains("v1.0.0"));
    assert!(runner.commands().is_empty());
}
