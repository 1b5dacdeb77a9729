//! push and push-remote commands

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::types::BranchName;

pub fn push_remote(ctx: &Context, branch: &str) -> Result<ExitCode> {
    let branch = BranchName::new(branch).context("Invalid branch name")?;
    let remote = ctx
        .git()
        .push_remote_for_branch(&branch)
        .with_context(|| format!("No push remote configured for '{}'", branch))?;
    ctx.printer.value(&remote)?;
    Ok(ExitCode::SUCCESS)
}

/// `force` and `set_upstream` are only reachable with a branch; clap
/// enforces that.
pub fn push(
    ctx: &Context,
    branch: Option<&str>,
    force: bool,
    set_upstream: Option<&str>,
) -> Result<ExitCode> {
    let git = ctx.git();
    let Some(branch) = branch else {
        git.push().context("Failed to push")?;
        return Ok(ExitCode::SUCCESS);
    };

    let branch = BranchName::new(branch).context("Invalid branch name")?;
    let pushed = match (force, set_upstream) {
        (_, Some(remote)) => git.push_and_set_upstream(remote, &branch),
        (true, None) => git.force_push_branch(&branch),
        (false, None) => git.push_branch(&branch),
    };
    pushed.with_context(|| format!("Failed to push '{}'", branch))?;

    ctx.printer.success(format!("Pushed {}", branch));
    Ok(ExitCode::SUCCESS)
}
