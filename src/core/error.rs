//! core::error
//!
//! The normalized error returned by every facade operation.
//!
//! # Shape
//!
//! Every failure, whatever its origin, surfaces as one [`SpaceGitError`]:
//! - a human-readable message
//! - an [`ErrorCode`] drawn from a fixed set
//! - a metadata map of contextual values (space, file, branch, ...)
//! - an optional wrapped cause (the collaborator error that triggered it)
//!
//! Errors are built once at the failure site and never mutated afterwards;
//! the builder methods consume `self` and are only used during construction.
//!
//! # Example
//!
//! ```
//! use spacegit::core::error::{ErrorCode, SpaceGitError};
//!
//! let err = SpaceGitError::new(ErrorCode::SpaceNotFound, "space 'demo' does not exist")
//!     .with_meta("space", "demo");
//!
//! assert_eq!(err.code(), ErrorCode::SpaceNotFound);
//! assert_eq!(err.meta_str("space"), Some("demo"));
//! ```

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Contextual key/value pairs attached to an error.
pub type Metadata = BTreeMap<String, Value>;

/// Boxed collaborator error kept as the cause of a normalized error.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Machine-readable failure codes.
///
/// The string form (see [`ErrorCode::as_str`]) is stable and is what the
/// CLI prints and what the JSON report carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The named space is not known to the registry.
    SpaceNotFound,
    /// Single-file commit target is absent and no content was supplied.
    FileMissing,
    /// One or more paths to revert are absent from the working tree.
    PathNotFound,
    InitFailed,
    CloneFailed,
    StatusFailed,
    CommitAllFailed,
    CommitFileFailed,
    PullFailed,
    PushFailed,
    CheckoutBranchFailed,
    CheckoutFileFailed,
    CheckoutFileFromBranchFailed,
}

impl ErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 13] = [
        ErrorCode::SpaceNotFound,
        ErrorCode::FileMissing,
        ErrorCode::PathNotFound,
        ErrorCode::InitFailed,
        ErrorCode::CloneFailed,
        ErrorCode::StatusFailed,
        ErrorCode::CommitAllFailed,
        ErrorCode::CommitFileFailed,
        ErrorCode::PullFailed,
        ErrorCode::PushFailed,
        ErrorCode::CheckoutBranchFailed,
        ErrorCode::CheckoutFileFailed,
        ErrorCode::CheckoutFileFromBranchFailed,
    ];

    /// Stable string form of the code.
    ///
    /// # Example
    ///
    /// ```
    /// use spacegit::core::error::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::CheckoutFileFromBranchFailed.as_str(), "CHECKOUT_FILE_FROM_BRANCH_FAILED");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::SpaceNotFound => "SPACE_NOT_FOUND",
            ErrorCode::FileMissing => "FILE_MISSING",
            ErrorCode::PathNotFound => "PATH_NOT_FOUND",
            ErrorCode::InitFailed => "INIT_FAILED",
            ErrorCode::CloneFailed => "CLONE_FAILED",
            ErrorCode::StatusFailed => "STATUS_FAILED",
            ErrorCode::CommitAllFailed => "COMMIT_ALL_FAILED",
            ErrorCode::CommitFileFailed => "COMMIT_FILE_FAILED",
            ErrorCode::PullFailed => "PULL_FAILED",
            ErrorCode::PushFailed => "PUSH_FAILED",
            ErrorCode::CheckoutBranchFailed => "CHECKOUT_BRANCH_FAILED",
            ErrorCode::CheckoutFileFailed => "CHECKOUT_FILE_FAILED",
            ErrorCode::CheckoutFileFromBranchFailed => "CHECKOUT_FILE_FROM_BRANCH_FAILED",
        }
    }

    /// Whether the code is raised before any executor call.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ErrorCode::SpaceNotFound | ErrorCode::FileMissing | ErrorCode::PathNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single error shape used for every facade failure.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SpaceGitError {
    message: String,
    code: ErrorCode,
    metadata: Metadata,
    #[source]
    cause: Option<Cause>,
}

impl SpaceGitError {
    /// Create an error with no metadata and no cause.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            metadata: Metadata::new(),
            cause: None,
        }
    }

    /// Attach a metadata entry.
    #[must_use]
    pub fn with_meta(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }

    /// Attach the collaborator error that caused this failure.
    #[must_use]
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Machine-readable code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// All contextual metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Look up a metadata value.
    pub fn meta(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    /// Look up a metadata value that is a string.
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }

    /// The wrapped collaborator error, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Build the serializable report used for `--json` output.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            message: self.message.clone(),
            metadata: self.metadata.clone(),
            cause: self.cause.as_ref().map(|c| c.to_string()),
        }
    }
}

/// Serializable snapshot of a [`SpaceGitError`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}
