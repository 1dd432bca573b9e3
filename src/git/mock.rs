//! git::mock
//!
//! In-memory [`GitExecutor`] for deterministic testing.
//!
//! # Design
//!
//! The mock records every call it receives and can be told to fail a
//! specific method. Clones share state, so a test can hand one clone to the
//! facade and inspect the other afterwards.
//!
//! # Example
//!
//! ```
//! use spacegit::git::mock::{FailOn, GitCall, MockGit};
//! use spacegit::git::{GitError, GitExecutor};
//! use std::path::Path;
//!
//! let git = MockGit::new().with_status("?? new.txt\n");
//! assert_eq!(git.status(Path::new("/tmp/demo"), true).unwrap(), "?? new.txt\n");
//!
//! git.fail_on(FailOn::Pull, GitError::new("no upstream"));
//! assert!(git.pull(Path::new("/tmp/demo")).is_err());
//!
//! assert_eq!(git.calls().len(), 2);
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use super::interface::{GitError, GitExecutor};

/// Mock git executor.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockGit {
    inner: Arc<Mutex<MockGitInner>>,
}

#[derive(Debug, Default)]
struct MockGitInner {
    /// Text returned by `status`.
    status: String,
    /// Methods configured to fail.
    failures: HashMap<FailOn, GitError>,
    /// Recorded calls, in order.
    calls: Vec<GitCall>,
}

/// Which executor method should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailOn {
    Init,
    Clone,
    Status,
    Add,
    Commit,
    Pull,
    Push,
    CheckoutBranch,
    CheckoutPath,
    CheckoutPathFromBranch,
}

/// Recorded call for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Init {
        cwd: PathBuf,
    },
    Clone {
        url: String,
        cwd: PathBuf,
    },
    Status {
        cwd: PathBuf,
        porcelain: bool,
    },
    Add {
        pathspec: String,
        cwd: PathBuf,
    },
    Commit {
        message: String,
        cwd: PathBuf,
    },
    Pull {
        cwd: PathBuf,
    },
    Push {
        cwd: PathBuf,
        remote_url: Option<String>,
    },
    CheckoutBranch {
        cwd: PathBuf,
        branch: String,
        create: bool,
    },
    CheckoutPath {
        cwd: PathBuf,
        paths: Vec<String>,
    },
    CheckoutPathFromBranch {
        cwd: PathBuf,
        branch: String,
        paths: Vec<String>,
    },
}

impl MockGit {
    /// Create a mock whose calls all succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text `status` returns.
    #[must_use]
    pub fn with_status(self, status: impl Into<String>) -> Self {
        self.lock().status = status.into();
        self
    }

    /// Make `method` fail with `error` from now on.
    pub fn fail_on(&self, method: FailOn, error: GitError) {
        self.lock().failures.insert(method, error);
    }

    /// All calls received so far.
    pub fn calls(&self) -> Vec<GitCall> {
        self.lock().calls.clone()
    }

    /// Whether no call has been received.
    pub fn is_untouched(&self) -> bool {
        self.lock().calls.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, MockGitInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record `call`, then fail if `method` is configured to.
    fn record(&self, method: FailOn, call: GitCall) -> Result<(), GitError> {
        let mut inner = self.lock();
        inner.calls.push(call);
        match inner.failures.get(&method) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl GitExecutor for MockGit {
    fn init(&self, cwd: &Path) -> Result<(), GitError> {
        self.record(
            FailOn::Init,
            GitCall::Init {
                cwd: cwd.to_path_buf(),
            },
        )
    }

    fn clone_repo(&self, url: &str, cwd: &Path) -> Result<(), GitError> {
        self.record(
            FailOn::Clone,
            GitCall::Clone {
                url: url.to_string(),
                cwd: cwd.to_path_buf(),
            },
        )
    }

    fn status(&self, cwd: &Path, porcelain: bool) -> Result<String, GitError> {
        self.record(
            FailOn::Status,
            GitCall::Status {
                cwd: cwd.to_path_buf(),
                porcelain,
            },
        )?;
        Ok(self.lock().status.clone())
    }

    fn add(&self, pathspec: &str, cwd: &Path) -> Result<(), GitError> {
        self.record(
            FailOn::Add,
            GitCall::Add {
                pathspec: pathspec.to_string(),
                cwd: cwd.to_path_buf(),
            },
        )
    }

    fn commit(&self, message: &str, cwd: &Path) -> Result<(), GitError> {
        self.record(
            FailOn::Commit,
            GitCall::Commit {
                message: message.to_string(),
                cwd: cwd.to_path_buf(),
            },
        )
    }

    fn pull(&self, cwd: &Path) -> Result<(), GitError> {
        self.record(
            FailOn::Pull,
            GitCall::Pull {
                cwd: cwd.to_path_buf(),
            },
        )
    }

    fn push(&self, cwd: &Path, remote_url: Option<&str>) -> Result<(), GitError> {
        self.record(
            FailOn::Push,
            GitCall::Push {
                cwd: cwd.to_path_buf(),
                remote_url: remote_url.map(str::to_string),
            },
        )
    }

    fn checkout_branch(&self, cwd: &Path, branch: &str, create: bool) -> Result<(), GitError> {
        self.record(
            FailOn::CheckoutBranch,
            GitCall::CheckoutBranch {
                cwd: cwd.to_path_buf(),
                branch: branch.to_string(),
                create,
            },
        )
    }

    fn checkout_path(&self, cwd: &Path, paths: &[String]) -> Result<(), GitError> {
        self.record(
            FailOn::CheckoutPath,
            GitCall::CheckoutPath {
                cwd: cwd.to_path_buf(),
                paths: paths.to_vec(),
            },
        )
    }

    fn checkout_path_from_branch(
        &self,
        cwd: &Path,
        branch: &str,
        paths: &[String],
    ) -> Result<(), GitError> {
        self.record(
            FailOn::CheckoutPathFromBranch,
            GitCall::CheckoutPathFromBranch {
                cwd: cwd.to_path_buf(),
                branch: branch.to_string(),
                paths: paths.to_vec(),
            },
        )
    }
}
