use std::collections::BTreeSet;

use crate::error::Result;
use crate::git::{GitStatus, Repository};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    status: GitStatus,
    tags: BTreeSet<String>,
}

impl MockRepository {
    /// Create a clean mock repository checked out on `branch`
    pub fn on_branch(branch: impl Into<String>) -> Self {
        MockRepository {
            status: GitStatus {
                current_branch: branch.into(),
                clean: true,
            },
            tags: BTreeSet::new(),
        }
    }

    /// Mark the working tree as having uncommitted changes
    pub fn dirty(mut self) -> Self {
        self.status.clean = false;
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, name: impl Into<String>) -> Self {
        self.tags.insert(name.into());
        self
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::on_branch("master")
    }
}

impl Repository for MockRepository {
    fn status(&self) -> Result<GitStatus> {
        Ok(self.status.clone())
    }

    fn list_tags(&self) -> Result<BTreeSet<String>> {
        Ok(self.tags.clone())
    }
}
