//! Read-only git queries used by the sanity checks.
//!
//! The primary abstraction is the [Repository] trait. Implementations:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: a mock implementation for testing
//!
//! Everything that mutates the repository (checkout, merge, commit, tag,
//! push) goes through the shell instead, see [crate::executor].

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::collections::BTreeSet;

use crate::error::Result;

/// Branch name reported when HEAD does not point at a branch.
pub const DETACHED_HEAD: &str = "HEAD";

/// Snapshot of the working copy state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitStatus {
    /// Short name of the checked out branch, or [DETACHED_HEAD]
    pub current_branch: String,
    /// No staged, unstaged or untracked changes (ignored files don't count)
    pub clean: bool,
}

/// Git queries needed before a release can start
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]; implementations map their
/// underlying errors to [crate::error::ReleaseError]. Callers treat every
/// error as fatal.
pub trait Repository {
    /// Current branch and working tree cleanliness
    fn status(&self) -> Result<GitStatus>;

    /// Names of all tags in the repository
    fn list_tags(&self) -> Result<BTreeSet<String>>;
}
