//! cli
//!
//! Command-line interface layer for spacegit.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and install logging
//! - Delegate to command handlers, which call the facade
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! [`crate::facade::SpaceGit`]. Nothing here touches a repository directly.

pub mod args;
pub mod commands;

pub use args::Cli;

use crate::core::config::Config;
use crate::ui::{logging, output::Verbosity};
use anyhow::{Context as _, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(root) = &cli.root {
        config = config.with_spaces_root(root.clone());
    }

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    let level = match verbosity.log_level_override() {
        Some(level) => level,
        None => config.log_level(),
    };
    logging::init(level, config.log_json());

    if let Some(path) = config.loaded_from() {
        tracing::debug!(path = %path.display(), "loaded configuration");
    }

    let ctx = commands::Context {
        verbosity,
        json: cli.json,
    };

    commands::dispatch(cli.command, &config, &ctx)
}
