//! Release orchestration
//!
//! A release is two phases:
//! 1. Sanity checks ([Release::prepare]) that only read state and fail on a
//!    [Precondition](crate::precondition::Precondition) before anything changes.
//! 2. The ordered [plan::Step] list built by [plan::build_plan], executed one
//!    step at a time.
//!
//! The first failing step aborts the run. Nothing is rolled back: if the
//! build fails after switching branches the repository stays on the dist
//! branch and the operator takes it from there.

pub mod context;
pub mod plan;

pub use context::ReleaseContext;
pub use plan::{Action, Step};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::ReleaseConfig;
use crate::error::Result;
use crate::executor::CommandRunner;
use crate::git::Repository;
use crate::{ignore_file, manifest, ui};

/// Options for a release run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReleaseOptions {
    /// Do every local step but skip publishing and pushing, and allow
    /// releasing from any branch
    pub dry_run: bool,
}

/// Result of a successful release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    pub version: String,
    /// The tag that was created
    pub tag: String,
    /// The branch that was merged into the dist branch
    pub release_branch: String,
    pub dist_branch: String,
    /// Whether the publish command ran
    pub published: bool,
    /// Whether the dist branch and tags were pushed
    pub pushed: bool,
}

/// Runs a release against one repository
pub struct Release<'a, R, C> {
    config: &'a ReleaseConfig,
    repo: &'a R,
    runner: &'a C,
    workdir: PathBuf,
    options: ReleaseOptions,
}

impl<'a, R: Repository, C: CommandRunner> Release<'a, R, C> {
    /// # Arguments
    /// * `config` - Project configuration
    /// * `repo` - Source of git status and tags
    /// * `runner` - Executes the shell commands of the plan
    /// * `workdir` - Repository root; relative paths in `config` resolve here
    /// * `options` - Run options
    pub fn new(
        config: &'a ReleaseConfig,
        repo: &'a R,
        runner: &'a C,
        workdir: impl Into<PathBuf>,
        options: ReleaseOptions,
    ) -> Self {
        Release {
            config,
            repo,
            runner,
            workdir: workdir.into(),
            options,
        }
    }

    /// Runs the sanity checks and returns what they learned.
    ///
    /// Reads only; any error here leaves the repository untouched.
    pub fn prepare(&self) -> Result<ReleaseContext> {
        ui::display_status("Doing sanity checks...");

        let status = self.repo.status()?;
        let version = manifest::read_version(&self.workdir.join(&self.config.paths.manifest))?;

        context::check_branch(
            &status,
            &self.config.git.release_branch,
            self.options.dry_run,
        )?;
        context::check_clean(&status)?;

        let existing_tags = self.repo.list_tags()?;
        let tag = self.config.tag_pattern().format(&version);
        context::check_unique_tag(&existing_tags, &tag, &self.config.paths.manifest)?;

        Ok(ReleaseContext {
            version,
            tag,
            dry_run: self.options.dry_run,
            current_branch: status.current_branch,
            working_tree_clean: status.clean,
            existing_tags,
        })
    }

    /// Runs the whole release: sanity checks, then every planned step.
    pub fn run(&self) -> Result<ReleaseReport> {
        let ctx = self.prepare()?;

        for step in plan::build_plan(&ctx, self.config) {
            self.execute(&step)?;
        }

        ui::display_success("OK!");

        Ok(ReleaseReport {
            version: ctx.version,
            tag: ctx.tag,
            release_branch: ctx.current_branch,
            dist_branch: self.config.git.dist_branch.clone(),
            published: !ctx.dry_run,
            pushed: !ctx.dry_run,
        })
    }

    fn execute(&self, step: &Step) -> Result<()> {
        if step.action == Action::Skip {
            ui::display_skip(&step.label);
            return Ok(());
        }

        ui::display_status(&step.label);

        match &step.action {
            Action::RemoveDir(dir) => remove_dir(&self.workdir.join(dir)),
            Action::Run(commands) => commands
                .iter()
                .try_for_each(|command| self.runner.run(command)),
            Action::StripIgnoreEntry { file, entry } => {
                ignore_file::remove_entry(&self.workdir.join(file), entry)
            }
            Action::Skip => Ok(()),
        }
    }
}

fn remove_dir(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
