//! git::system
//!
//! The production [`GitExecutor`].
//!
//! Repository creation goes through `git2`; every other action runs the
//! configured git binary in the target directory, so status text is git's
//! own output.

use std::path::Path;
use std::process::Command;

use super::interface::{GitError, GitExecutor};

/// Executor backed by libgit2 and the git binary.
#[derive(Debug, Clone)]
pub struct SystemGit {
    /// Binary to run for shelled-out commands
    binary: String,
    /// Optional commit identity, passed as `-c user.name` / `-c user.email`
    user_name: Option<String>,
    user_email: Option<String>,
}

impl SystemGit {
    /// Create an executor that runs `binary`.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            user_name: None,
            user_email: None,
        }
    }

    /// Use a fixed commit identity instead of the user's git config.
    #[must_use]
    pub fn with_identity(mut self, name: Option<String>, email: Option<String>) -> Self {
        self.user_name = name;
        self.user_email = email;
        self
    }

    /// Run the git binary in `cwd` and return its stdout.
    fn run(&self, cwd: &Path, args: &[&str]) -> Result<String, GitError> {
        let mut cmd = Command::new(&self.binary);
        if let Some(name) = &self.user_name {
            cmd.arg("-c").arg(format!("user.name={}", name));
        }
        if let Some(email) = &self.user_email {
            cmd.arg("-c").arg(format!("user.email={}", email));
        }
        cmd.args(args)
            .current_dir(cwd)
            .env("GIT_TERMINAL_PROMPT", "0");

        tracing::debug!(cwd = %cwd.display(), ?args, "running git");

        let output = cmd.output().map_err(|e| {
            GitError::new(format!(
                "failed to run {} {}: {}",
                self.binary,
                args.first().copied().unwrap_or_default(),
                e
            ))
        })?;

        if !output.status.success() {
            let message = failure_message(&output.stderr, &output.stdout)
                .unwrap_or_else(|| format!("git {} failed", args.join(" ")));
            return Err(match output.status.code() {
                Some(code) => GitError::with_code(message, code),
                None => GitError::new(message),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new("git")
    }
}

/// Git's explanation of a failure: stderr, or stdout when stderr is empty
/// (`commit` reports "nothing to commit" there).
fn failure_message(stderr: &[u8], stdout: &[u8]) -> Option<String> {
    [stderr, stdout]
        .into_iter()
        .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
        .find(|text| !text.is_empty())
}

fn require_paths(paths: &[String]) -> Result<(), GitError> {
    if paths.is_empty() {
        return Err(GitError::new("no paths given"));
    }
    Ok(())
}

impl GitExecutor for SystemGit {
    fn init(&self, cwd: &Path) -> Result<(), GitError> {
        git2::Repository::init(cwd)?;
        Ok(())
    }

    fn clone_repo(&self, url: &str, cwd: &Path) -> Result<(), GitError> {
        self.run(cwd, &["clone", "--", url, "."]).map(drop)
    }

    fn status(&self, cwd: &Path, porcelain: bool) -> Result<String, GitError> {
        if porcelain {
            self.run(cwd, &["status", "--porcelain"])
        } else {
            self.run(cwd, &["status"])
        }
    }

    fn add(&self, pathspec: &str, cwd: &Path) -> Result<(), GitError> {
        self.run(cwd, &["add", "--", pathspec]).map(drop)
    }

    fn commit(&self, message: &str, cwd: &Path) -> Result<(), GitError> {
        self.run(cwd, &["commit", "-m", message]).map(drop)
    }

    fn pull(&self, cwd: &Path) -> Result<(), GitError> {
        self.run(cwd, &["pull"]).map(drop)
    }

    fn push(&self, cwd: &Path, remote_url: Option<&str>) -> Result<(), GitError> {
        match remote_url {
            Some(url) => self.run(cwd, &["push", url, "HEAD"]).map(drop),
            None => self.run(cwd, &["push"]).map(drop),
        }
    }

    fn checkout_branch(&self, cwd: &Path, branch: &str, create: bool) -> Result<(), GitError> {
        if create {
            self.run(cwd, &["checkout", "-b", branch]).map(drop)
        } else {
            self.run(cwd, &["checkout", branch]).map(drop)
        }
    }

    fn checkout_path(&self, cwd: &Path, paths: &[String]) -> Result<(), GitError> {
        require_paths(paths)?;
        let mut args = vec!["checkout", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.run(cwd, &args).map(drop)
    }

    fn checkout_path_from_branch(
        &self,
        cwd: &Path,
        branch: &str,
        paths: &[String],
    ) -> Result<(), GitError> {
        require_paths(paths)?;
        let mut args = vec!["checkout", branch, "--"];
        args.extend(paths.iter().map(String::as_str));
        self.run(cwd, &args).map(drop)
    }
}
