//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, output is machine-readable JSON.

use std::fmt::Display;

use serde_json::Value;

use crate::core::error::SpaceGitError;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Log level implied by the verbosity, if it overrides the config.
    pub fn log_level_override(&self) -> Option<&'static str> {
        match self {
            Verbosity::Quiet => Some("warn"),
            Verbosity::Normal => None,
            Verbosity::Debug => Some("debug"),
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a JSON value on stdout.
pub fn json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        Err(e) => error(format!("cannot encode output: {}", e)),
    }
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a normalized error for humans.
///
/// ```text
/// error[FILE_MISSING]: file does not exist and no content provided
///   file: "a.txt"
///   space: "demo"
/// ```
pub fn format_space_error(err: &SpaceGitError) -> String {
    let mut out = format!("error[{}]: {}", err.code(), err.message());
    for (key, value) in err.metadata() {
        out.push_str(&format!("\n  {}: {}", key, value));
    }
    if let Some(cause) = err.cause() {
        out.push_str(&format!("\n  caused by: {}", cause));
    }
    out
}

/// Report a normalized error (always shown).
pub fn space_error(err: &SpaceGitError, as_json: bool) {
    if as_json {
        match serde_json::to_value(err.report()) {
            Ok(report) => json(&serde_json::json!({ "error": report })),
            Err(_) => eprintln!("{}", format_space_error(err)),
        }
    } else {
        eprintln!("{}", format_space_error(err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorCode;
    use crate::git::GitError;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::Normal.log_level_override(), None);
    }

    #[test]
    fn list_formatting() {
        assert_eq!(format_list(&["a", "b"], "  "), "  a\n  b");
        assert_eq!(format_list::<&str>(&[], "- "), "");
    }

    #[test]
    fn space_error_formatting() {
        let err = SpaceGitError::new(ErrorCode::PullFailed, "failed to pull repository")
            .with_meta("space", "demo")
            .with_cause(GitError::with_code("no tracking information", 1));

        let text = format_space_error(&err);
        assert_eq!(
            text,
            "error[PULL_FAILED]: failed to pull repository\n  space: \"demo\"\n  caused by: no tracking information"
        );
    }
}
