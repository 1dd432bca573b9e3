//! ui
//!
//! User-facing output and log setup.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//! - [`logging`] - `tracing` subscriber installation
//!
//! # Design
//!
//! All terminal output goes through this module so quiet and JSON modes
//! are honored consistently. Results go to stdout; logs and errors to
//! stderr (errors go to stdout as JSON when `--json` is set).

pub mod logging;
pub mod output;
