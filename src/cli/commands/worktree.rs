//! Working tree and commit commands: apply, add, commit, amend, rebase, checkout

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context as _, Result};

use super::text_or_stdin;
use crate::cli::Context;

/// Apply a patch from `patch`, or from stdin when no file is given.
pub fn apply(ctx: &Context, patch: Option<&Path>) -> Result<ExitCode> {
    let git = ctx.git();
    let applied = match patch {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open patch '{}'", path.display()))?;
            git.apply_patch(file)
        }
        None => git.apply_patch(std::io::stdin()),
    };
    applied.context("Failed to apply patch")?;

    ctx.printer.success("Applied patch");
    Ok(ExitCode::SUCCESS)
}

pub fn add(ctx: &Context, paths: &[String]) -> Result<ExitCode> {
    ctx.git().add(paths).context("Failed to stage paths")?;
    Ok(ExitCode::SUCCESS)
}

pub fn commit(ctx: &Context, message: Option<String>) -> Result<ExitCode> {
    let message = text_or_stdin(message)?;
    let git = ctx.git();
    git.commit(&message).context("Failed to commit")?;

    match git.rev_parse("HEAD") {
        Ok(head) => ctx.printer.success(format!("Committed {}", head.short(7))),
        Err(err) => ctx
            .printer
            .warn(format!("committed, but HEAD could not be read: {}", err)),
    }
    Ok(ExitCode::SUCCESS)
}

/// Amend HEAD. Without `--no-edit` or `-m` this hands the terminal to the
/// configured editor.
pub fn amend(ctx: &Context, no_edit: bool, message: Option<&str>) -> Result<ExitCode> {
    let git = ctx.git();
    let amended = match (no_edit, message) {
        (true, _) => git.amend_no_edit(),
        (false, Some(message)) => git.amend_with_message(message),
        (false, None) => git.amend(),
    };
    amended.context("Failed to amend HEAD")?;
    Ok(ExitCode::SUCCESS)
}

pub fn rebase(ctx: &Context, base: &str, topic: &str) -> Result<ExitCode> {
    ctx.git()
        .rebase(base, topic)
        .with_context(|| format!("Failed to rebase '{}' onto '{}'", topic, base))?;
    ctx.printer
        .success(format!("Rebased {} onto {}", topic, base));
    Ok(ExitCode::SUCCESS)
}

pub fn checkout(ctx: &Context, rev: &str) -> Result<ExitCode> {
    ctx.git()
        .checkout(rev)
        .with_context(|| format!("Failed to check out '{}'", rev))?;
    ctx.printer.success(format!("Checked out {}", rev));
    Ok(ExitCode::SUCCESS)
}
