//! git::interface
//!
//! The command-executor contract consumed by the facade.
//!
//! Every version-control action the facade can request is one method on
//! [`GitExecutor`]. Each method takes the working directory it operates in
//! plus its arguments, blocks until the action finishes, and reports failure
//! through the single [`GitError`] type.
//!
//! # Example
//!
//! ```ignore
//! use spacegit::git::{GitExecutor, SystemGit};
//! use std::path::Path;
//!
//! let git = SystemGit::new("git");
//! git.init(Path::new("/srv/spaces/demo"))?;
//! let status = git.status(Path::new("/srv/spaces/demo"), true)?;
//! ```

use std::path::Path;

use thiserror::Error;

/// Failure of a delegated version-control action.
///
/// Carries a message (usually git's own stderr) and, when one exists, the
/// numeric code reported by the backend: the process exit status for
/// commands run through the git binary, the libgit2 error code otherwise.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct GitError {
    message: String,
    code: Option<i32>,
}

impl GitError {
    /// Create an error without a code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create an error with an embedded code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code: Some(code),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The backend code, if one was reported.
    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::with_code(err.message(), err.raw_code())
    }
}

/// Runs version-control actions against a working directory.
///
/// Implementations must be thread-safe (Send + Sync). They do not
/// serialize concurrent calls against the same directory; callers that
/// need that must arrange it themselves.
pub trait GitExecutor: Send + Sync {
    /// Create a repository in `cwd`.
    fn init(&self, cwd: &Path) -> Result<(), GitError>;

    /// Clone `url` into `cwd`.
    fn clone_repo(&self, url: &str, cwd: &Path) -> Result<(), GitError>;

    /// Working tree status. `porcelain` selects the stable short format.
    fn status(&self, cwd: &Path, porcelain: bool) -> Result<String, GitError>;

    /// Stage a pathspec (`.` stages everything).
    fn add(&self, pathspec: &str, cwd: &Path) -> Result<(), GitError>;

    /// Commit staged changes.
    fn commit(&self, message: &str, cwd: &Path) -> Result<(), GitError>;

    /// Pull from the configured upstream.
    fn pull(&self, cwd: &Path) -> Result<(), GitError>;

    /// Push to the configured upstream, or to `remote_url` if given.
    fn push(&self, cwd: &Path, remote_url: Option<&str>) -> Result<(), GitError>;

    /// Switch to `branch`, creating it first when `create` is set.
    fn checkout_branch(&self, cwd: &Path, branch: &str, create: bool) -> Result<(), GitError>;

    /// Restore `paths` in the working tree from the index/HEAD.
    fn checkout_path(&self, cwd: &Path, paths: &[String]) -> Result<(), GitError>;

    /// Restore `paths` in the working tree from `branch`.
    fn checkout_path_from_branch(
        &self,
        cwd: &Path,
        branch: &str,
        paths: &[String],
    ) -> Result<(), GitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_carries_optional_code() {
        let plain = GitError::new("boom");
        assert_eq!(plain.to_string(), "boom");
        assert_eq!(plain.code(), None);

        let coded = GitError::with_code("fatal: not a git repository", 128);
        assert_eq!(coded.message(), "fatal: not a git repository");
        assert_eq!(coded.code(), Some(128));
    }

    #[test]
    fn from_git2_keeps_raw_code() {
        let err = git2::Error::new(
            git2::ErrorCode::NotFound,
            git2::ErrorClass::Reference,
            "reference not found",
        );
        let raw = err.raw_code();
        let git_err = GitError::from(err);
        assert_eq!(git_err.message(), "reference not found");
        assert_eq!(git_err.code(), Some(raw));
    }
}
