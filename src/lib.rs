//! spacegit - Git operations scoped to named spaces
//!
//! spacegit runs version-control operations (init, clone, status, commit,
//! pull, push, branch checkout, path restore) inside logical "spaces": named
//! working directories owned by a registry. Callers name a space; spacegit
//! resolves it, validates what the operation needs, delegates to git, and
//! reports any failure as one normalized error with a stable code.
//!
//! # Architecture
//!
//! - [`facade`] - The scoped operation facade ([`facade::SpaceGit`])
//! - [`core`] - Normalized error, value types, configuration
//! - [`git`] - Command-executor seam and its git-backed implementation
//! - [`space`] - Space registry and file service
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Output formatting and logging setup
//!
//! # Correctness Invariants
//!
//! 1. Every operation returns success or exactly one [`core::error::SpaceGitError`]
//! 2. A missing space is reported before any collaborator other than the
//!    registry is called
//! 3. Pre-validation failures never reach the executor
//! 4. Dry runs never reach the executor

pub mod cli;
pub mod core;
pub mod facade;
pub mod git;
pub mod space;
pub mod ui;
