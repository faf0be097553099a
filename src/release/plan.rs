use std::path::PathBuf;

use crate::config::ReleaseConfig;
use crate::release::ReleaseContext;

/// What a step does once its label has been printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Recursively delete a directory relative to the repository root;
    /// a missing directory is fine
    RemoveDir(PathBuf),
    /// Run shell command lines in order, stopping at the first failure
    Run(Vec<String>),
    /// Nothing to do, the label is the substitute message
    Skip,
    /// Drop every `entry` line from the ignore file
    StripIgnoreEntry { file: PathBuf, entry: String },
}

/// One labelled, fallible step of the release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    pub action: Action,
}

impl Step {
    fn new(label: impl Into<String>, action: Action) -> Self {
        Step {
            label: label.into(),
            action,
        }
    }

    fn run(label: impl Into<String>, command: impl Into<String>) -> Self {
        Step::new(label, Action::Run(vec![command.into()]))
    }

    /// Shell commands this step would run
    pub fn commands(&self) -> &[String] {
        match &self.action {
            Action::Run(commands) => commands,
            _ => &[],
        }
    }
}

/// Quotes `value` as one word for the shell [crate::executor::ShellExecutor] uses.
///
/// POSIX shells get single quotes, with embedded `'` written as `'\''`, so
/// `$`, backticks and globs in branch or tag names stay literal.
pub fn shell_quote(value: &str) -> String {
    if cfg!(windows) {
        format!("\"{}\"", value)
    } else {
        format!("'{}'", value.replace('\'', "'\\''"))
    }
}

/// Builds the ordered list of side-effecting steps for a checked context.
///
/// Publish and push turn into [Action::Skip] in dry-run mode; everything
/// else runs in both modes.
pub fn build_plan(ctx: &ReleaseContext, config: &ReleaseConfig) -> Vec<Step> {
    let build_dir = &config.paths.build_dir;
    let ignore_file = &config.paths.ignore_file;
    let dist = &config.git.dist_branch;
    let remote = &config.git.remote;
    let branch = &ctx.current_branch;
    let tag = &ctx.tag;

    let publish = if ctx.dry_run {
        Step::new("Skipping publishing the package...", Action::Skip)
    } else {
        Step::run("Publishing the package...", config.commands.publish.as_str())
    };

    let push = if ctx.dry_run {
        Step::new(format!("Skipping pushing to {}...", remote), Action::Skip)
    } else {
        Step::run(
            format!("Pushing to {}...", remote),
            format!(
                "git push {} {} --tags",
                shell_quote(remote),
                shell_quote(&format!("{}:{}", dist, dist))
            ),
        )
    };

    vec![
        Step::new(
            format!(
                "Deleting the {} folder (it will conflict with the next step)...",
                build_dir
            ),
            Action::RemoveDir(PathBuf::from(build_dir)),
        ),
        Step::run(
            format!("Switching to the {} branch...", dist),
            format!("git checkout {}", shell_quote(dist)),
        ),
        Step::run(
            format!("Merging from \"{}\" branch...", branch),
            format!("git merge {}", shell_quote(branch)),
        ),
        Step::run("Running the build...", config.commands.build.as_str()),
        Step::run("Running the checks...", config.commands.check.as_str()),
        publish,
        Step::new(
            format!("Removing \"{}\" from {}...", build_dir, ignore_file),
            Action::StripIgnoreEntry {
                file: PathBuf::from(ignore_file),
                entry: build_dir.clone(),
            },
        ),
        Step::new(
            format!("Committing the {} dir...", build_dir),
            Action::Run(vec![
                format!("git add {}", shell_quote(&format!("{}/", build_dir))),
                format!(
                    "git commit -m {}",
                    shell_quote(&format!("Release {}", tag))
                ),
            ]),
        ),
        Step::run(
            format!("Reverting the change to {}...", ignore_file),
            "git reset --hard HEAD",
        ),
        Step::run(
            format!("Tagging commit as \"{}\"...", tag),
            format!("git tag {}", shell_quote(tag)),
        ),
        push,
        Step::run(
            format!("Switching back to \"{}\" (so you can continue to work)...", branch),
            format!("git checkout {}", shell_quote(branch)),
        ),
    ]
}
