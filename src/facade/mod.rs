//! facade
//!
//! Version-control operations scoped to logical spaces.
//!
//! # Contract
//!
//! Every operation on [`SpaceGit`] runs the same phases:
//!
//! 1. **Resolve** the space through the registry, failing with
//!    `SPACE_NOT_FOUND` before any other collaborator is touched
//! 2. **Pre-validate** referenced paths (single-file commit, working-tree
//!    revert)
//! 3. **Dry run** (branch checkout, revert, restore): report the action to
//!    the tracer and return [`Outcome::Simulated`] without delegating
//! 4. **Delegate** to the executor, translating any [`GitError`] into a
//!    [`SpaceGitError`] with an operation-specific code; the executor error
//!    is kept as the cause
//!
//! Calls are independent of each other. Resolution is repeated on every
//! call, and the facade holds no locks: two calls against the same space
//! from different threads may race inside git.
//!
//! # Example
//!
//! ```no_run
//! use spacegit::core::config::Config;
//! use spacegit::facade::SpaceGit;
//!
//! let config = Config::load(None).unwrap();
//! let sg = SpaceGit::from_config(&config);
//!
//! sg.init_repo("demo").unwrap();
//! sg.commit_file("demo", "README.md", "add readme", Some("# demo\n".into())).unwrap();
//! println!("{}", sg.get_status("demo", true).unwrap());
//! ```

mod trace;

pub use trace::{DryRunAction, DryRunTracer, LogTracer, RecordingTracer};

use std::fmt;
use std::path::PathBuf;

use crate::core::config::Config;
use crate::core::error::{ErrorCode, SpaceGitError};
use crate::core::types::{FileContent, Outcome, PathList};
use crate::git::{GitError, GitExecutor, SystemGit};
use crate::space::{DirFileService, DirSpaceRegistry, FileService, SpaceRegistry};

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, SpaceGitError>;

/// Scoped operation facade.
///
/// Holds its collaborators for its whole lifetime and never mutates them.
pub struct SpaceGit {
    git: Box<dyn GitExecutor>,
    spaces: Box<dyn SpaceRegistry>,
    files: Box<dyn FileService>,
    tracer: Box<dyn DryRunTracer>,
}

impl fmt::Debug for SpaceGit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpaceGit").finish_non_exhaustive()
    }
}

/// Wrap an executor failure.
fn delegation_error(code: ErrorCode, message: &str, cause: GitError) -> SpaceGitError {
    SpaceGitError::new(code, message).with_cause(cause)
}

impl SpaceGit {
    /// Compose a facade from its collaborators.
    ///
    /// Dry runs are reported through [`LogTracer`] unless
    /// [`SpaceGit::with_tracer`] replaces it.
    pub fn new(
        git: impl GitExecutor + 'static,
        spaces: impl SpaceRegistry + 'static,
        files: impl FileService + 'static,
    ) -> Self {
        Self {
            git: Box::new(git),
            spaces: Box::new(spaces),
            files: Box::new(files),
            tracer: Box::new(LogTracer),
        }
    }

    /// Build the production facade: directory-backed spaces under the
    /// configured root, and [`SystemGit`] with the configured binary and
    /// identity.
    pub fn from_config(config: &Config) -> Self {
        let (user_name, user_email) = config.git_identity();
        let git = SystemGit::new(config.git_binary())
            .with_identity(user_name.map(str::to_string), user_email.map(str::to_string));
        let registry = DirSpaceRegistry::new(config.spaces_root());
        let files = DirFileService::new(registry.clone());
        Self::new(git, registry, files)
    }

    /// Replace the dry-run tracer.
    #[must_use]
    pub fn with_tracer(mut self, tracer: impl DryRunTracer + 'static) -> Self {
        self.tracer = Box::new(tracer);
        self
    }

    /// Resolve `space` to its directory.
    ///
    /// # Errors
    ///
    /// `SPACE_NOT_FOUND` if the registry does not know the space.
    fn repo_path(&self, space: &str) -> Result<PathBuf> {
        if !self.spaces.exists(space) {
            return Err(SpaceGitError::new(
                ErrorCode::SpaceNotFound,
                format!("space '{}' does not exist", space),
            )
            .with_meta("space", space));
        }
        Ok(self.spaces.resolve_path(space))
    }

    /// Initialize a repository in the space.
    ///
    /// # Errors
    ///
    /// `SPACE_NOT_FOUND`, or `INIT_FAILED` if git fails.
    pub fn init_repo(&self, space: &str) -> Result<Outcome> {
        let path = self.repo_path(space)?;
        tracing::debug!(space, path = %path.display(), "initializing repository");

        self.git.init(&path).map_err(|e| {
            delegation_error(ErrorCode::InitFailed, "failed to initialize git repository", e)
                .with_meta("space", space)
        })?;
        Ok(Outcome::Applied)
    }

    /// Clone `url` into the space.
    ///
    /// # Errors
    ///
    /// `SPACE_NOT_FOUND`, or `CLONE_FAILED` if git fails.
    pub fn clone_repo(&self, space: &str, url: &str) -> Result<Outcome> {
        let path = self.repo_path(space)?;
        tracing::debug!(space, url, "cloning repository");

        self.git.clone_repo(url, &path).map_err(|e| {
            delegation_error(ErrorCode::CloneFailed, "failed to clone repository", e)
                .with_meta("space", space)
                .with_meta("url", url)
        })?;
        Ok(Outcome::Applied)
    }

    /// Status text of the space's repository.
    ///
    /// `porcelain` selects git's stable short format.
    ///
    /// # Errors
    ///
    /// `SPACE_NOT_FOUND`, or `STATUS_FAILED` if git fails.
    pub fn get_status(&self, space: &str, porcelain: bool) -> Result<String> {
        let path = self.repo_path(space)?;

        self.git.status(&path, porcelain).map_err(|e| {
            delegation_error(ErrorCode::StatusFailed, "failed to get git status", e)
                .with_meta("space", space)
                .with_meta("porcelain", porcelain)
        })
    }

    /// Stage everything and commit it.
    ///
    /// # Errors
    ///
    /// `SPACE_NOT_FOUND`, or `COMMIT_ALL_FAILED` if staging or committing
    /// fails.
    pub fn commit_all(&self, space: &str, message: &str) -> Result<Outcome> {
        let path = self.repo_path(space)?;
        tracing::debug!(space, "committing all changes");

        let commit_failed = |e| {
            delegation_error(ErrorCode::CommitAllFailed, "failed to commit all changes", e)
                .with_meta("space", space)
                .with_meta("message", message)
        };
        self.git.add(".", &path).map_err(commit_failed)?;
        self.git.commit(message, &path).map_err(commit_failed)?;
        Ok(Outcome::Applied)
    }

    /// Commit a single file, creating it from `content` if it is absent.
    ///
    /// An existing file is committed as-is; `content` is ignored and the
    /// file is never rewritten.
    ///
    /// # Errors
    ///
    /// - `SPACE_NOT_FOUND`
    /// - `FILE_MISSING` if the file is absent and `content` is `None`
    /// - `COMMIT_FILE_FAILED` if creating, staging or committing fails
    pub fn commit_file(
        &self,
        space: &str,
        relative_path: &str,
        message: &str,
        content: Option<FileContent>,
    ) -> Result<Outcome> {
        let path = self.repo_path(space)?;

        if !self.files.exists(space, relative_path) {
            let Some(content) = content else {
                return Err(SpaceGitError::new(
                    ErrorCode::FileMissing,
                    "file does not exist and no content provided",
                )
                .with_meta("space", space)
                .with_meta("file", relative_path));
            };

            self.files
                .write(space, relative_path, &content)
                .map_err(|e| {
                    SpaceGitError::new(ErrorCode::CommitFileFailed, "failed to create file")
                        .with_meta("space", space)
                        .with_meta("file", relative_path)
                        .with_cause(e)
                })?;
            tracing::debug!(space, file = relative_path, "created file");
        }

        let commit_failed = |e| {
            delegation_error(ErrorCode::CommitFileFailed, "failed to commit file", e)
                .with_meta("space", space)
                .with_meta("file", relative_path)
        };
        self.git.add(relative_path, &path).map_err(commit_failed)?;
        self.git.commit(message, &path).map_err(commit_failed)?;
        Ok(Outcome::Applied)
    }

    /// Pull from the upstream remote.
    ///
    /// # Errors
    ///
    /// `SPACE_NOT_FOUND`, or `PULL_FAILED` if git fails.
    pub fn pull_repo(&self, space: &str) -> Result<Outcome> {
        let path = self.repo_path(space)?;
        tracing::debug!(space, "pulling");

        self.git.pull(&path).map_err(|e| {
            delegation_error(ErrorCode::PullFailed, "failed to pull repository", e)
                .with_meta("space", space)
        })?;
        Ok(Outcome::Applied)
    }

    /// Push to the upstream remote, or to `remote_url` when given.
    ///
    /// # Errors
    ///
    /// `SPACE_NOT_FOUND`, or `PUSH_FAILED` if git fails.
    pub fn push_repo(&self, space: &str, remote_url: Option<&str>) -> Result<Outcome> {
        let path = self.repo_path(space)?;
        tracing::debug!(space, remote_url, "pushing");

        self.git.push(&path, remote_url).map_err(|e| {
            let err = delegation_error(ErrorCode::PushFailed, "failed to push repository", e)
                .with_meta("space", space);
            match remote_url {
                Some(url) => err.with_meta("url", url),
                None => err,
            }
        })?;
        Ok(Outcome::Applied)
    }

    /// Switch to `branch`, creating it when `create` is set.
    ///
    /// # Errors
    ///
    /// `SPACE_NOT_FOUND`, or `CHECKOUT_BRANCH_FAILED` if git fails. A dry
    /// run cannot fail past resolution.
    pub fn checkout_branch(
        &self,
        space: &str,
        branch: &str,
        create: bool,
        dry_run: bool,
    ) -> Result<Outcome> {
        let path = self.repo_path(space)?;

        if dry_run {
            self.tracer.dry_run(
                space,
                &DryRunAction::CheckoutBranch {
                    branch: branch.to_string(),
                    create,
                },
            );
            return Ok(Outcome::Simulated);
        }

        self.git.checkout_branch(&path, branch, create).map_err(|e| {
            delegation_error(ErrorCode::CheckoutBranchFailed, "failed to checkout branch", e)
                .with_meta("space", space)
                .with_meta("branch", branch)
                .with_meta("create", create)
        })?;
        Ok(Outcome::Applied)
    }

    /// Revert `paths` to their last committed state.
    ///
    /// Every path must currently exist in the space.
    ///
    /// # Errors
    ///
    /// - `SPACE_NOT_FOUND`
    /// - `PATH_NOT_FOUND` listing exactly the absent paths, in request order
    /// - `CHECKOUT_FILE_FAILED` if git fails
    pub fn checkout_path(
        &self,
        space: &str,
        paths: impl Into<PathList>,
        dry_run: bool,
    ) -> Result<Outcome> {
        let paths = paths.into();
        let path = self.repo_path(space)?;

        let missing: Vec<&str> = paths
            .iter()
            .filter(|p| !self.files.exists(space, p))
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(SpaceGitError::new(
                ErrorCode::PathNotFound,
                "some files do not exist in the working directory",
            )
            .with_meta("space", space)
            .with_meta("missing_files", missing));
        }

        if dry_run {
            self.tracer
                .dry_run(space, &DryRunAction::RevertPaths { paths });
            return Ok(Outcome::Simulated);
        }

        self.git
            .checkout_path(&path, paths.as_slice())
            .map_err(|e| {
                delegation_error(ErrorCode::CheckoutFileFailed, "failed to revert file(s)", e)
                    .with_meta("space", space)
                    .with_meta("files", paths.as_slice())
            })?;
        Ok(Outcome::Applied)
    }

    /// Restore `paths` from `branch` into the working tree.
    ///
    /// Paths need not exist locally beforehand.
    ///
    /// # Errors
    ///
    /// `SPACE_NOT_FOUND`, or `CHECKOUT_FILE_FROM_BRANCH_FAILED` if git fails.
    pub fn checkout_path_from_branch(
        &self,
        space: &str,
        paths: impl Into<PathList>,
        branch: &str,
        dry_run: bool,
    ) -> Result<Outcome> {
        let paths = paths.into();
        let path = self.repo_path(space)?;

        if dry_run {
            self.tracer.dry_run(
                space,
                &DryRunAction::RestorePaths {
                    paths,
                    branch: branch.to_string(),
                },
            );
            return Ok(Outcome::Simulated);
        }

        self.git
            .checkout_path_from_branch(&path, branch, paths.as_slice())
            .map_err(|e| {
                delegation_error(
                    ErrorCode::CheckoutFileFromBranchFailed,
                    "failed to restore file(s) from branch",
                    e,
                )
                .with_meta("space", space)
                .with_meta("files", paths.as_slice())
                .with_meta("branch", branch)
            })?;
        Ok(Outcome::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::MockGit;
    use crate::space::mock::MockSpaces;

    #[test]
    fn facade_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SpaceGit>();
    }

    #[test]
    fn resolution_happens_on_every_call() {
        let spaces = MockSpaces::new().with_space("demo", "/tmp/demo");
        let sg = SpaceGit::new(MockGit::new(), spaces.clone(), spaces.clone());

        sg.pull_repo("demo").unwrap();
        sg.pull_repo("demo").unwrap();

        let resolves = spaces
            .calls()
            .into_iter()
            .filter(|c| matches!(c, crate::space::mock::SpaceCall::Resolve { .. }))
            .count();
        assert_eq!(resolves, 2);
    }
}
