//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each handler calls exactly one facade operation and formats the result.
//! Facade failures are returned as [`SpaceGitError`] inside `anyhow` so
//! `main` can render them with their code and metadata.

use anyhow::{Context as _, Result};
use serde_json::json;

use crate::cli::args::Command;
use crate::core::config::Config;
use crate::core::error::SpaceGitError;
use crate::core::types::{FileContent, Outcome};
use crate::facade::{RecordingTracer, SpaceGit};
use crate::space::DirSpaceRegistry;
use crate::ui::output::{self, Verbosity};

/// Per-invocation output settings.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub verbosity: Verbosity,
    pub json: bool,
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, config: &Config, ctx: &Context) -> Result<()> {
    let tracer = RecordingTracer::new();
    let sg = SpaceGit::from_config(config).with_tracer(tracer.clone());

    match command {
        Command::Init { space } => {
            let outcome = sg.init_repo(&space)?;
            report(ctx, &space, outcome, "Initialized repository", &tracer);
        }
        Command::Clone { space, url } => {
            let outcome = sg.clone_repo(&space, &url)?;
            report(ctx, &space, outcome, &format!("Cloned {}", url), &tracer);
        }
        Command::Status { space, long } => {
            let status = sg.get_status(&space, !long)?;
            if ctx.json {
                output::json(&json!({ "space": space, "status": status }));
            } else if ctx.verbosity != Verbosity::Quiet {
                print!("{}", status);
            }
        }
        Command::Commit {
            space,
            message,
            file,
            content,
            content_json,
        } => {
            let outcome = match file {
                None => sg.commit_all(&space, &message)?,
                Some(file) => {
                    let content = match (content, content_json) {
                        (Some(text), _) => Some(FileContent::Text(text)),
                        (None, Some(raw)) => Some(FileContent::Document(
                            serde_json::from_str(&raw).context("Invalid --content-json")?,
                        )),
                        (None, None) => None,
                    };
                    sg.commit_file(&space, &file, &message, content)?
                }
            };
            report(ctx, &space, outcome, "Committed", &tracer);
        }
        Command::Pull { space } => {
            let outcome = sg.pull_repo(&space)?;
            report(ctx, &space, outcome, "Pulled", &tracer);
        }
        Command::Push { space, url } => {
            let outcome = sg.push_repo(&space, url.as_deref())?;
            report(ctx, &space, outcome, "Pushed", &tracer);
        }
        Command::Checkout {
            space,
            branch,
            create,
            dry_run,
        } => {
            let outcome = sg.checkout_branch(&space, &branch, create, dry_run)?;
            report(
                ctx,
                &space,
                outcome,
                &format!("Switched to branch '{}'", branch),
                &tracer,
            );
        }
        Command::Revert {
            space,
            paths,
            from_branch,
            dry_run,
        } => {
            let outcome = match &from_branch {
                Some(branch) => sg.checkout_path_from_branch(&space, paths, branch, dry_run)?,
                None => sg.checkout_path(&space, paths, dry_run)?,
            };
            let done = match from_branch {
                Some(branch) => format!("Restored from '{}'", branch),
                None => "Reverted".to_string(),
            };
            report(ctx, &space, outcome, &done, &tracer);
        }
        Command::Spaces => spaces(config, ctx)?,
        Command::Config => show_config(config, ctx)?,
    }

    Ok(())
}

/// Print the result of a mutating operation.
fn report(ctx: &Context, space: &str, outcome: Outcome, done: &str, tracer: &RecordingTracer) {
    let skipped: Vec<String> = tracer
        .events()
        .into_iter()
        .map(|(_, action)| action.to_string())
        .collect();

    if ctx.json {
        output::json(&json!({
            "space": space,
            "outcome": outcome,
            "dry_run": skipped,
        }));
        return;
    }

    match outcome {
        Outcome::Applied => output::print(format!("{} in space '{}'", done, space), ctx.verbosity),
        Outcome::Simulated => {
            output::print(
                format!("[dry-run] space '{}':\n{}", space, output::format_list(&skipped, "  ")),
                ctx.verbosity,
            );
        }
    }
}

fn spaces(config: &Config, ctx: &Context) -> Result<()> {
    let registry = DirSpaceRegistry::new(config.spaces_root());
    let names = registry
        .list()
        .with_context(|| format!("Failed to list spaces in {}", registry.root().display()))?;

    if ctx.json {
        output::json(&json!({ "root": registry.root(), "spaces": names }));
    } else if names.is_empty() {
        output::print(
            format!("No spaces in {}", registry.root().display()),
            ctx.verbosity,
        );
    } else {
        output::print(output::format_list(&names, ""), ctx.verbosity);
    }
    Ok(())
}

fn show_config(config: &Config, ctx: &Context) -> Result<()> {
    let rendered = config.to_toml()?;
    if ctx.json {
        let value: toml::Value = toml::from_str(&rendered)?;
        output::json(&json!({
            "loaded_from": config.loaded_from(),
            "config": value,
        }));
        return Ok(());
    }

    if let Some(path) = config.loaded_from() {
        println!("# loaded from {}", path.display());
    }
    print!("{}", rendered);
    Ok(())
}

/// Find the normalized error inside a command failure, if there is one.
pub fn as_space_error(err: &anyhow::Error) -> Option<&SpaceGitError> {
    err.downcast_ref::<SpaceGitError>()
}
