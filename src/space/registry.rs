//! space::registry
//!
//! Logical space lookup.
//!
//! # Design
//!
//! A registry answers two questions: does a space exist, and where does it
//! live. Spaces are created and destroyed outside this crate; nothing here
//! ever makes or removes one.
//!
//! [`DirSpaceRegistry`] backs spaces with directories: every direct
//! subdirectory of the root whose name is a valid space name is a space.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Space existence and name-to-path resolution.
pub trait SpaceRegistry: Send + Sync {
    /// Whether the named space exists.
    fn exists(&self, name: &str) -> bool;

    /// Filesystem path of the named space.
    ///
    /// Only meaningful for spaces where [`SpaceRegistry::exists`] is true.
    fn resolve_path(&self, name: &str) -> PathBuf;
}

/// Check whether `name` can name a space.
///
/// Names must be non-empty, must not start with `.`, and must not contain
/// path separators or control characters.
///
/// # Example
///
/// ```
/// use spacegit::space::is_valid_space_name;
///
/// assert!(is_valid_space_name("demo"));
/// assert!(is_valid_space_name("team-a_2"));
/// assert!(!is_valid_space_name(""));
/// assert!(!is_valid_space_name(".."));
/// assert!(!is_valid_space_name("a/b"));
/// ```
pub fn is_valid_space_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.chars().any(|c| c.is_control())
}

/// Directory-backed registry.
#[derive(Debug, Clone)]
pub struct DirSpaceRegistry {
    root: PathBuf,
}

impl DirSpaceRegistry {
    /// Create a registry rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding the spaces.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of all spaces, sorted.
    ///
    /// A missing root means there are no spaces yet.
    pub fn list(&self) -> io::Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if is_valid_space_name(name) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

impl SpaceRegistry for DirSpaceRegistry {
    fn exists(&self, name: &str) -> bool {
        is_valid_space_name(name) && self.root.join(name).is_dir()
    }

    fn resolve_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn directories_are_spaces() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("demo")).unwrap();
        fs::write(temp.path().join("not-a-space"), "file").unwrap();

        let registry = DirSpaceRegistry::new(temp.path());
        assert!(registry.exists("demo"));
        assert!(!registry.exists("not-a-space"));
        assert!(!registry.exists("missing"));
        assert_eq!(registry.resolve_path("demo"), temp.path().join("demo"));
    }

    #[test]
    fn traversal_names_never_exist() {
        let temp = TempDir::new().unwrap();
        let inner = temp.path().join("root");
        fs::create_dir_all(inner.join("demo")).unwrap();

        let registry = DirSpaceRegistry::new(&inner);
        assert!(!registry.exists(".."));
        assert!(!registry.exists("."));
        assert!(!registry.exists("demo/.."));
    }

    #[test]
    fn list_is_sorted_and_skips_hidden() {
        let temp = TempDir::new().unwrap();
        for name in ["zeta", "alpha", ".hidden"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }

        let registry = DirSpaceRegistry::new(temp.path());
        assert_eq!(registry.list().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn missing_root_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let registry = DirSpaceRegistry::new(temp.path().join("absent"));
        assert!(registry.list().unwrap().is_empty());
        assert!(!registry.exists("demo"));
    }
}
