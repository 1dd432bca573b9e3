//! git
//!
//! The command-executor seam between the facade and version control.
//!
//! # Architecture
//!
//! The facade never touches a repository itself. Every action goes through
//! a [`GitExecutor`], which reports failure as a [`GitError`]. `git2` and the
//! git binary are only reached from [`SystemGit`]; no other module imports
//! `git2` or spawns git.
//!
//! # Responsibilities
//!
//! - Repository creation and cloning
//! - Status (porcelain or long form)
//! - Staging, committing, pulling, pushing
//! - Branch checkout and path restore
//!
//! # Example
//!
//! ```ignore
//! use spacegit::git::{GitExecutor, SystemGit};
//! use std::path::Path;
//!
//! let git = SystemGit::new("git");
//! git.add(".", Path::new("/srv/spaces/demo"))?;
//! git.commit("snapshot", Path::new("/srv/spaces/demo"))?;
//! ```

mod interface;
pub mod mock;
mod system;

pub use interface::{GitError, GitExecutor};
pub use system::SystemGit;
