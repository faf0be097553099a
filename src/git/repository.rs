use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use git2::{ErrorCode, Repository as Git2Repo, StatusOptions};

use crate::error::{ReleaseError, Result};
use crate::git::{GitStatus, DETACHED_HEAD};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        log::debug!("opened repository at {}", repo.path().display());

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Root of the working tree
    ///
    /// Bare repositories have nothing to build or commit, so they are rejected.
    pub fn workdir(&self) -> Result<PathBuf> {
        self.repo.workdir().map(Path::to_path_buf).ok_or_else(|| {
            ReleaseError::Git(git2::Error::from_str("repository has no working tree"))
        })
    }

    fn current_branch(&self) -> Result<String> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head
                .shorthand()
                .unwrap_or(DETACHED_HEAD)
                .to_string()),
            Ok(_) => Ok(DETACHED_HEAD.to_string()),
            // A fresh repository has HEAD pointing at a branch with no commits yet
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self.repo.find_reference("HEAD")?;
                let target = head.symbolic_target().unwrap_or(DETACHED_HEAD);
                Ok(target
                    .strip_prefix("refs/heads/")
                    .unwrap_or(target)
                    .to_string())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl super::Repository for Git2Repository {
    fn status(&self) -> Result<GitStatus> {
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .include_ignored(false)
            .recurse_untracked_dirs(false);

        let statuses = self.repo.statuses(Some(&mut options))?;
        let status = GitStatus {
            current_branch: self.current_branch()?,
            clean: statuses.is_empty(),
        };
        log::debug!(
            "git status: branch={} clean={} ({} entries)",
            status.current_branch,
            status.clean,
            statuses.len()
        );

        Ok(status)
    }

    fn list_tags(&self) -> Result<BTreeSet<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }
}
