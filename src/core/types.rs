//! core::types
//!
//! Value types that flow through facade operations.
//!
//! # Types
//!
//! - [`PathList`] - One or more space-relative paths, always held as a list
//! - [`FileContent`] - Raw text or a structured document to serialize
//! - [`Outcome`] - How a successful operation completed
//!
//! # Examples
//!
//! ```
//! use spacegit::core::types::PathList;
//!
//! let single: PathList = "a.txt".into();
//! let many: PathList = vec!["a.txt", "b.txt"].into();
//!
//! assert_eq!(single.as_slice(), ["a.txt"]);
//! assert_eq!(many.len(), 2);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Space-relative paths for revert/restore operations.
///
/// Accepts a single path or any list of paths and keeps them in request
/// order. Duplicates are preserved; the executor decides what they mean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathList(Vec<String>);

impl PathList {
    /// Build a list from any iterator of path-like strings.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(paths.into_iter().map(Into::into).collect())
    }

    /// The paths as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over the paths.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Number of paths.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no paths.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the list, returning the inner vector.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for PathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<&str> for PathList {
    fn from(path: &str) -> Self {
        Self(vec![path.to_string()])
    }
}

impl From<String> for PathList {
    fn from(path: String) -> Self {
        Self(vec![path])
    }
}

impl From<Vec<String>> for PathList {
    fn from(paths: Vec<String>) -> Self {
        Self(paths)
    }
}

impl From<Vec<&str>> for PathList {
    fn from(paths: Vec<&str>) -> Self {
        Self::new(paths)
    }
}

impl From<&[&str]> for PathList {
    fn from(paths: &[&str]) -> Self {
        Self::new(paths.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for PathList {
    fn from(paths: [&str; N]) -> Self {
        Self::new(paths)
    }
}

/// Content used to materialize a file before committing it.
///
/// The file service decides how a [`FileContent::Document`] is encoded
/// (see [`crate::space::DirFileService`]).
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    /// Raw text, written as-is.
    Text(String),
    /// Structured key/value document, serialized on write.
    Document(Value),
}

impl From<&str> for FileContent {
    fn from(text: &str) -> Self {
        FileContent::Text(text.to_string())
    }
}

impl From<String> for FileContent {
    fn from(text: String) -> Self {
        FileContent::Text(text)
    }
}

impl From<Value> for FileContent {
    fn from(doc: Value) -> Self {
        FileContent::Document(doc)
    }
}

/// How a successful operation completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The executor ran the command and it succeeded.
    Applied,
    /// Dry run: nothing was executed, the action was only traced.
    Simulated,
}

impl Outcome {
    /// Whether the operation was short-circuited by a dry run.
    pub fn is_simulated(&self) -> bool {
        matches!(self, Outcome::Simulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_path_becomes_one_element_list() {
        let from_str: PathList = "x.txt".into();
        let from_string: PathList = String::from("x.txt").into();
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.as_slice(), ["x.txt"]);
    }

    #[test]
    fn list_order_is_preserved() {
        let list: PathList = ["b", "a", "c"].into();
        let collected: Vec<_> = list.iter().map(String::as_str).collect();
        assert_eq!(collected, ["b", "a", "c"]);
        assert_eq!(list.to_string(), "b, a, c");
    }

    #[test]
    fn path_list_serializes_as_array() {
        let list: PathList = vec!["x.txt", "y.txt"].into();
        assert_eq!(serde_json::to_value(&list).unwrap(), json!(["x.txt", "y.txt"]));
    }

    #[test]
    fn content_conversions() {
        assert_eq!(FileContent::from("hi"), FileContent::Text("hi".into()));
        assert_eq!(
            FileContent::from(json!({"k": 1})),
            FileContent::Document(json!({"k": 1}))
        );
    }

    #[test]
    fn outcome_flags() {
        assert!(Outcome::Simulated.is_simulated());
        assert!(!Outcome::Applied.is_simulated());
    }
}
