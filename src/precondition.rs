use thiserror::Error;

/// Repository states that forbid starting a release.
///
/// All of these are detected during the sanity checks, before anything on
/// disk or in git is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// Not on the branch releases are cut from
    #[error("Must be on {expected} branch (currently on '{actual}')")]
    WrongBranch { expected: String, actual: String },

    /// Staged, unstaged or untracked changes are present
    #[error("Must have clean working tree")]
    DirtyWorkingTree,

    /// The tag for the manifest version already exists
    #[error("Must have a unique version in {manifest} (tag '{tag}' already exists)")]
    DuplicateTag { tag: String, manifest: String },
}
