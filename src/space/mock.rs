//! space::mock
//!
//! In-memory registry and file service for deterministic testing.
//!
//! [`MockSpaces`] implements both [`SpaceRegistry`] and [`FileService`] over
//! shared state, records every call, and can be told to fail writes.
//!
//! # Example
//!
//! ```
//! use spacegit::space::mock::MockSpaces;
//! use spacegit::space::{FileService, SpaceRegistry};
//!
//! let spaces = MockSpaces::new()
//!     .with_space("demo", "/tmp/demo")
//!     .with_file("demo", "a.txt");
//!
//! assert!(SpaceRegistry::exists(&spaces, "demo"));
//! assert!(FileService::exists(&spaces, "demo", "a.txt"));
//! assert!(!FileService::exists(&spaces, "demo", "b.txt"));
//! ```

use std::collections::{BTreeSet, HashMap};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use super::files::{FileError, FileService};
use super::registry::SpaceRegistry;
use crate::core::types::FileContent;

/// Mock spaces. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockSpaces {
    inner: Arc<Mutex<MockSpacesInner>>,
}

#[derive(Debug, Default)]
struct MockSpacesInner {
    /// Space name to path.
    spaces: HashMap<String, PathBuf>,
    /// Existing files per space.
    files: HashMap<String, BTreeSet<String>>,
    /// Content written through `write`.
    written: HashMap<(String, String), FileContent>,
    /// Message for failing writes, if writes should fail.
    write_failure: Option<String>,
    /// Recorded calls, in order.
    calls: Vec<SpaceCall>,
}

/// Recorded call for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceCall {
    Exists { name: String },
    Resolve { name: String },
    FileExists { space: String, path: String },
    Write { space: String, path: String },
}

impl SpaceCall {
    /// Whether the call went to the file service rather than the registry.
    pub fn is_file_call(&self) -> bool {
        matches!(self, SpaceCall::FileExists { .. } | SpaceCall::Write { .. })
    }
}

impl MockSpaces {
    /// Create a mock with no spaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a space.
    #[must_use]
    pub fn with_space(self, name: &str, path: impl Into<PathBuf>) -> Self {
        self.lock().spaces.insert(name.to_string(), path.into());
        self
    }

    /// Mark a file as present in a space.
    #[must_use]
    pub fn with_file(self, space: &str, path: &str) -> Self {
        self.lock()
            .files
            .entry(space.to_string())
            .or_default()
            .insert(path.to_string());
        self
    }

    /// Make every write fail with `message`.
    pub fn fail_writes(&self, message: &str) {
        self.lock().write_failure = Some(message.to_string());
    }

    /// All calls received so far.
    pub fn calls(&self) -> Vec<SpaceCall> {
        self.lock().calls.clone()
    }

    /// Calls that went to the file service.
    pub fn file_calls(&self) -> Vec<SpaceCall> {
        self.calls().into_iter().filter(SpaceCall::is_file_call).collect()
    }

    /// Content written to `path` in `space`, if any.
    pub fn written(&self, space: &str, path: &str) -> Option<FileContent> {
        self.lock()
            .written
            .get(&(space.to_string(), path.to_string()))
            .cloned()
    }

    fn lock(&self) -> MutexGuard<'_, MockSpacesInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SpaceRegistry for MockSpaces {
    fn exists(&self, name: &str) -> bool {
        let mut inner = self.lock();
        inner.calls.push(SpaceCall::Exists {
            name: name.to_string(),
        });
        inner.spaces.contains_key(name)
    }

    fn resolve_path(&self, name: &str) -> PathBuf {
        let mut inner = self.lock();
        inner.calls.push(SpaceCall::Resolve {
            name: name.to_string(),
        });
        inner.spaces.get(name).cloned().unwrap_or_default()
    }
}

impl FileService for MockSpaces {
    fn exists(&self, space: &str, relative_path: &str) -> bool {
        let mut inner = self.lock();
        inner.calls.push(SpaceCall::FileExists {
            space: space.to_string(),
            path: relative_path.to_string(),
        });
        inner
            .files
            .get(space)
            .is_some_and(|files| files.contains(relative_path))
    }

    fn write(
        &self,
        space: &str,
        relative_path: &str,
        content: &FileContent,
    ) -> Result<(), FileError> {
        let mut inner = self.lock();
        inner.calls.push(SpaceCall::Write {
            space: space.to_string(),
            path: relative_path.to_string(),
        });

        if let Some(message) = &inner.write_failure {
            return Err(FileError::Io {
                path: PathBuf::from(relative_path),
                source: io::Error::other(message.clone()),
            });
        }

        inner
            .files
            .entry(space.to_string())
            .or_default()
            .insert(relative_path.to_string());
        inner.written.insert(
            (space.to_string(), relative_path.to_string()),
            content.clone(),
        );
        Ok(())
    }
}
