//! Read-only queries: describe, diff, status, rev-parse, log, merge-base

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use super::answer;
use crate::cli::Context;

pub fn describe(ctx: &Context, rev: &str, format: Option<&str>) -> Result<ExitCode> {
    let format = format
        .map(str::to_string)
        .unwrap_or_else(|| ctx.config.describe_format());
    let text = ctx
        .git()
        .describe_ref(rev, &format)
        .with_context(|| format!("Failed to describe '{}'", rev))?;
    ctx.printer.value(&text)?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the patch verbatim; it already ends in a newline when non-empty.
pub fn diff(ctx: &Context, from: &str, to: &str) -> Result<ExitCode> {
    let patch = ctx
        .git()
        .diff(from, to)
        .with_context(|| format!("Failed to diff '{}' and '{}'", from, to))?;
    if ctx.printer.json {
        ctx.printer.value(&patch)?;
    } else {
        print!("{}", patch);
    }
    Ok(ExitCode::SUCCESS)
}

pub fn is_different(ctx: &Context, from: &str, to: &str, check: bool) -> Result<ExitCode> {
    let different = ctx
        .git()
        .is_different(from, to)
        .with_context(|| format!("Failed to compare '{}' and '{}'", from, to))?;
    answer(ctx, different, check)
}

pub fn has_changes(ctx: &Context, check: bool) -> Result<ExitCode> {
    let changed = ctx
        .git()
        .has_changes()
        .context("Failed to read working tree status")?;
    answer(ctx, changed, check)
}

pub fn current_branch(ctx: &Context) -> Result<ExitCode> {
    let branch = ctx
        .git()
        .current_branch()
        .context("Failed to determine current branch")?;
    ctx.printer.optional(branch.as_ref())?;
    Ok(ExitCode::SUCCESS)
}

pub fn branch_exists(ctx: &Context, name: &str, check: bool) -> Result<ExitCode> {
    answer(ctx, ctx.git().branch_exists(name), check)
}

pub fn rev_parse(ctx: &Context, rev: &str) -> Result<ExitCode> {
    let oid = ctx
        .git()
        .rev_parse(rev)
        .with_context(|| format!("Failed to resolve '{}'", rev))?;
    ctx.printer.value(&oid)?;
    Ok(ExitCode::SUCCESS)
}

pub fn log(ctx: &Context, args: &[String]) -> Result<ExitCode> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let text = ctx.git().log(&args).context("Failed to read log")?;
    ctx.printer.value(&text)?;
    Ok(ExitCode::SUCCESS)
}

pub fn fork_point(ctx: &Context, rev: &str, args: &[String]) -> Result<ExitCode> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let oid = ctx
        .git()
        .fork_point(rev, &args)
        .with_context(|| format!("No fork point found from '{}'", rev))?;
    ctx.printer.value(&oid)?;
    Ok(ExitCode::SUCCESS)
}

pub fn is_ancestor(
    ctx: &Context,
    ancestor: &str,
    descendant: &str,
    check: bool,
) -> Result<ExitCode> {
    let result = ctx
        .git()
        .is_ancestor(ancestor, descendant)
        .with_context(|| format!("Failed to check ancestry of '{}'", ancestor))?;
    answer(ctx, result, check)
}
