//! core
//!
//! Core domain types, errors and configuration for spacegit.
//!
//! # Modules
//!
//! - [`error`] - The normalized error and its fixed code set
//! - [`types`] - Path lists, file content, operation outcomes
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - One error shape for every failure
//! - Values are built once and never mutated after they are returned

pub mod config;
pub mod error;
pub mod types;
