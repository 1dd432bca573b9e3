//! space
//!
//! Logical spaces: named working directories owned by a registry.
//!
//! # Modules
//!
//! - [`SpaceRegistry`] / [`DirSpaceRegistry`] - existence and path resolution
//! - [`FileService`] / [`DirFileService`] - file checks and writes inside a space
//! - [`mock`] - in-memory implementations for tests
//!
//! # Invariants
//!
//! - This crate never creates or deletes a space
//! - File paths never escape their space directory

mod files;
pub mod mock;
mod registry;

pub use files::{render_content, DirFileService, FileError, FileService};
pub use registry::{is_valid_space_name, DirSpaceRegistry, SpaceRegistry};
