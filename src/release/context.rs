use std::collections::BTreeSet;

use crate::git::GitStatus;
use crate::precondition::Precondition;

/// Everything learned during the sanity checks.
///
/// Built once before the first side effect and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseContext {
    /// Version declared in the manifest
    pub version: String,
    /// Tag name derived from `version`
    pub tag: String,
    pub dry_run: bool,
    /// Branch the release is cut from, and switched back to at the end
    pub current_branch: String,
    pub working_tree_clean: bool,
    pub existing_tags: BTreeSet<String>,
}

/// Releases are cut from `expected` only, unless this is a dry run.
pub fn check_branch(status: &GitStatus, expected: &str, dry_run: bool) -> Result<(), Precondition> {
    if dry_run || status.current_branch == expected {
        return Ok(());
    }
    Err(Precondition::WrongBranch {
        expected: expected.to_string(),
        actual: status.current_branch.clone(),
    })
}

/// Enforced in every mode.
pub fn check_clean(status: &GitStatus) -> Result<(), Precondition> {
    if status.clean {
        Ok(())
    } else {
        Err(Precondition::DirtyWorkingTree)
    }
}

pub fn check_unique_tag(
    existing_tags: &BTreeSet<String>,
    tag: &str,
    manifest: &str,
) -> Result<(), Precondition> {
    if existing_tags.contains(tag) {
        return Err(Precondition::DuplicateTag {
            tag: tag.to_string(),
            manifest: manifest.to_string(),
        });
    }
    Ok(())
}
