//! facade::trace
//!
//! Dry-run trace sink.
//!
//! A dry run skips delegation and instead reports, exactly once, the action
//! that would have run. The sink is side-effect only; the facade never
//! reads anything back from it.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::core::types::PathList;

/// An action a dry run declined to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DryRunAction {
    /// Switch to (and maybe create) a branch.
    CheckoutBranch { branch: String, create: bool },
    /// Revert paths to their last committed state.
    RevertPaths { paths: PathList },
    /// Restore paths from another branch.
    RestorePaths { paths: PathList, branch: String },
}

impl fmt::Display for DryRunAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DryRunAction::CheckoutBranch { branch, create } => {
                write!(f, "would checkout branch '{}' (create={})", branch, create)
            }
            DryRunAction::RevertPaths { paths } => write!(f, "would revert: {}", paths),
            DryRunAction::RestorePaths { paths, branch } => {
                write!(f, "would restore: {} from branch '{}'", paths, branch)
            }
        }
    }
}

/// Receives dry-run notices.
pub trait DryRunTracer: Send + Sync {
    /// Report that `action` was skipped in `space`.
    fn dry_run(&self, space: &str, action: &DryRunAction);
}

/// Default tracer: one `tracing` info event per dry run.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl DryRunTracer for LogTracer {
    fn dry_run(&self, space: &str, action: &DryRunAction) {
        tracing::info!(space, action = %action, "[DRY-RUN] {} in space '{}'", action, space);
    }
}

/// Tracer that keeps every notice, for tests and for callers that want to
/// show the user what a dry run skipped. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingTracer {
    events: Arc<Mutex<Vec<(String, DryRunAction)>>>,
}

impl RecordingTracer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, as `(space, action)` pairs.
    pub fn events(&self) -> Vec<(String, DryRunAction)> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl DryRunTracer for RecordingTracer {
    fn dry_run(&self, space: &str, action: &DryRunAction) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((space.to_string(), action.clone()));
    }
}
