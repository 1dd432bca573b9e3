//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Load this config file instead of searching
//! - `--root <dir>`: Directory holding the spaces (overrides config)
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// spacegit - Git operations scoped to named spaces
#[derive(Parser, Debug)]
#[command(name = "spacegit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to load (default: search standard locations)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory whose subdirectories are the spaces
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results and errors as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a git repository in a space
    Init {
        /// Space name
        space: String,
    },

    /// Clone a remote repository into a space
    Clone {
        /// Space name
        space: String,

        /// Remote repository URL
        url: String,
    },

    /// Show the working tree status of a space
    Status {
        /// Space name
        space: String,

        /// Long human-readable format instead of porcelain
        #[arg(long)]
        long: bool,
    },

    /// Commit all changes, or a single file
    #[command(
        long_about = "Commit changes in a space.\n\n\
            Without FILE, stages everything and commits it. With FILE, commits only \
            that file. If FILE does not exist yet it is created from --content or \
            --content-json; without either, the command fails with FILE_MISSING.",
        after_help = "\
EXAMPLES:
    # Snapshot everything in the space
    spacegit commit demo -m \"snapshot\"

    # Commit one existing file
    spacegit commit demo -m \"update notes\" notes.md

    # Create a file and commit it
    spacegit commit demo -m \"add settings\" settings.json --content-json '{\"debug\": true}'"
    )]
    Commit {
        /// Space name
        space: String,

        /// Commit message
        #[arg(short, long)]
        message: String,

        /// File to commit, relative to the space root
        file: Option<String>,

        /// Text to create FILE with if it does not exist
        #[arg(long, requires = "file", conflicts_with = "content_json")]
        content: Option<String>,

        /// JSON document to create FILE with if it does not exist
        #[arg(long, requires = "file", value_name = "JSON")]
        content_json: Option<String>,
    },

    /// Pull from the upstream remote
    Pull {
        /// Space name
        space: String,
    },

    /// Push to the upstream remote or an explicit URL
    Push {
        /// Space name
        space: String,

        /// Push HEAD to this URL instead of the upstream
        #[arg(long)]
        url: Option<String>,
    },

    /// Switch branches in a space
    Checkout {
        /// Space name
        space: String,

        /// Branch to check out
        branch: String,

        /// Create the branch first
        #[arg(short = 'b', long)]
        create: bool,

        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// Revert paths to their last commit, or restore them from a branch
    #[command(
        long_about = "Revert paths in a space.\n\n\
            Without --from, every path must exist in the working tree and is reset \
            to its last committed state; missing paths fail with PATH_NOT_FOUND. \
            With --from, the paths are restored from that branch and need not \
            exist locally.",
        after_help = "\
EXAMPLES:
    # Throw away local edits to two files
    spacegit revert demo a.txt b.txt

    # Preview restoring a file from main
    spacegit revert demo config.toml --from main --dry-run"
    )]
    Revert {
        /// Space name
        space: String,

        /// Paths relative to the space root
        #[arg(required = true)]
        paths: Vec<String>,

        /// Restore from this branch instead of the last commit
        #[arg(long = "from", value_name = "BRANCH")]
        from_branch: Option<String>,

        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// List known spaces
    Spaces,

    /// Print the effective configuration
    Config,
}
