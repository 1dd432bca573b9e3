//! space::files
//!
//! File existence checks and content writes inside a space.
//!
//! # Paths
//!
//! Paths are relative to the space directory. Absolute paths and paths
//! with `..` components never refer to a file in a space: `exists` reports
//! false for them and `write` refuses them. A symlink exists even when its
//! target does not.
//!
//! # Writes
//!
//! - Parent directories are created as needed
//! - All writes are atomic (write to temp file, then rename)
//! - [`FileContent::Document`] is encoded as TOML for `.toml` files and as
//!   pretty-printed JSON for everything else

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use super::registry::{DirSpaceRegistry, SpaceRegistry};
use crate::core::types::FileContent;

/// Errors from file service operations.
#[derive(Debug, Error)]
pub enum FileError {
    /// The path is empty, absolute, or escapes the space.
    #[error("invalid path in space: '{0}'")]
    InvalidPath(String),

    /// The space does not exist.
    #[error("space not found: {0}")]
    UnknownSpace(String),

    /// A structured document could not be encoded.
    #[error("cannot serialize document for '{path}': {message}")]
    Serialize { path: String, message: String },

    /// Filesystem failure.
    #[error("cannot write '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// File access scoped to a space.
pub trait FileService: Send + Sync {
    /// Whether `relative_path` exists in `space`.
    fn exists(&self, space: &str, relative_path: &str) -> bool;

    /// Create or replace `relative_path` in `space` with `content`.
    fn write(&self, space: &str, relative_path: &str, content: &FileContent)
        -> Result<(), FileError>;
}

/// Check that `relative_path` stays inside its space.
fn is_contained(relative_path: &str) -> bool {
    let path = Path::new(relative_path);
    !relative_path.is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        && path.components().any(|c| matches!(c, Component::Normal(_)))
}

/// Encode `content` for the file at `relative_path`.
pub fn render_content(relative_path: &str, content: &FileContent) -> Result<String, FileError> {
    match content {
        FileContent::Text(text) => Ok(text.clone()),
        FileContent::Document(doc) => {
            let is_toml = Path::new(relative_path)
                .extension()
                .is_some_and(|ext| ext == "toml");

            let rendered = if is_toml {
                toml::to_string_pretty(doc).map_err(|e| e.to_string())
            } else {
                serde_json::to_string_pretty(doc)
                    .map(|s| s + "\n")
                    .map_err(|e| e.to_string())
            };

            rendered.map_err(|message| FileError::Serialize {
                path: relative_path.to_string(),
                message,
            })
        }
    }
}

/// Directory-backed file service.
#[derive(Debug, Clone)]
pub struct DirFileService {
    spaces: DirSpaceRegistry,
}

impl DirFileService {
    /// Create a file service over the spaces of `spaces`.
    pub fn new(spaces: DirSpaceRegistry) -> Self {
        Self { spaces }
    }

    /// Full path of `relative_path` in `space`, if both are valid.
    fn locate(&self, space: &str, relative_path: &str) -> Result<PathBuf, FileError> {
        if !is_contained(relative_path) {
            return Err(FileError::InvalidPath(relative_path.to_string()));
        }
        if !self.spaces.exists(space) {
            return Err(FileError::UnknownSpace(space.to_string()));
        }
        Ok(self.spaces.resolve_path(space).join(relative_path))
    }

    /// Write `contents` to `path` atomically.
    fn write_atomic(path: &Path, contents: &str) -> Result<(), FileError> {
        let io_err = |source| FileError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let temp_path = path.with_file_name(format!(".{}.tmp", file_name));

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(io_err)?;
            file.write_all(contents.as_bytes()).map_err(io_err)?;
            file.sync_all().map_err(io_err)?;
        }

        fs::rename(&temp_path, path).map_err(io_err)
    }
}

impl FileService for DirFileService {
    fn exists(&self, space: &str, relative_path: &str) -> bool {
        self.locate(space, relative_path)
            .map(|path| path.symlink_metadata().is_ok())
            .unwrap_or(false)
    }

    fn write(
        &self,
        space: &str,
        relative_path: &str,
        content: &FileContent,
    ) -> Result<(), FileError> {
        let path = self.locate(space, relative_path)?;
        let contents = render_content(relative_path, content)?;
        Self::write_atomic(&path, &contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn service() -> (TempDir, DirFileService) {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("demo")).unwrap();
        let svc = DirFileService::new(DirSpaceRegistry::new(temp.path()));
        (temp, svc)
    }

    #[test]
    fn containment_rules() {
        assert!(is_contained("a.txt"));
        assert!(is_contained("dir/a.txt"));
        assert!(is_contained("./a.txt"));
        assert!(!is_contained(""));
        assert!(!is_contained("."));
        assert!(!is_contained("../a.txt"));
        assert!(!is_contained("dir/../../a.txt"));
        assert!(!is_contained("/etc/passwd"));
    }

    #[test]
    fn write_text_creates_parents() {
        let (temp, svc) = service();
        svc.write("demo", "notes/today.md", &FileContent::from("# hi\n"))
            .unwrap();

        let written = fs::read_to_string(temp.path().join("demo/notes/today.md")).unwrap();
        assert_eq!(written, "# hi\n");
        assert!(svc.exists("demo", "notes/today.md"));
        assert!(!temp.path().join("demo/notes/.today.md.tmp").exists());
    }

    #[test]
    fn write_replaces_existing_file() {
        let (temp, svc) = service();
        svc.write("demo", "a.txt", &FileContent::from("one")).unwrap();
        svc.write("demo", "a.txt", &FileContent::from("two")).unwrap();
        assert_eq!(
            fs::read_to_string(temp.path().join("demo/a.txt")).unwrap(),
            "two"
        );
    }

    #[test]
    fn documents_encode_by_extension() {
        let doc = FileContent::Document(json!({"name": "demo", "count": 2}));

        let as_json = render_content("meta.json", &doc).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&as_json).unwrap();
        assert_eq!(parsed["count"], json!(2));
        assert!(as_json.ends_with('\n'));

        let as_toml = render_content("meta.toml", &doc).unwrap();
        let parsed: toml::Value = toml::from_str(&as_toml).unwrap();
        assert_eq!(parsed["name"].as_str(), Some("demo"));
    }

    #[test]
    fn non_table_document_cannot_be_toml() {
        let doc = FileContent::Document(json!([1, 2, 3]));
        assert!(matches!(
            render_content("list.toml", &doc),
            Err(FileError::Serialize { .. })
        ));
    }

    #[test]
    fn escaping_paths_rejected() {
        let (temp, svc) = service();
        fs::write(temp.path().join("outside.txt"), "x").unwrap();

        assert!(!svc.exists("demo", "../outside.txt"));
        assert!(matches!(
            svc.write("demo", "../outside.txt", &FileContent::from("y")),
            Err(FileError::InvalidPath(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_exists() {
        let (temp, svc) = service();
        std::os::unix::fs::symlink("gone.txt", temp.path().join("demo/link")).unwrap();

        assert!(svc.exists("demo", "link"));
        assert!(!svc.exists("demo", "gone.txt"));
    }

    #[test]
    fn unknown_space_rejected() {
        let (_temp, svc) = service();
        assert!(!svc.exists("other", "a.txt"));
        assert!(matches!(
            svc.write("other", "a.txt", &FileContent::from("y")),
            Err(FileError::UnknownSpace(_))
        ));
    }
}
