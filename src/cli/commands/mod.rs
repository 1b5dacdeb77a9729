//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each handler makes one call into [`crate::git::Git`] (two for push
//! commands that look up a remote first), adds context to the error, and
//! prints through [`crate::ui::output::Printer`].
//!
//! # Exit status
//!
//! Queries that answer yes/no print `true` or `false` and exit 0. With
//! `--check` they print nothing and exit 0 for yes, 1 for no. Errors exit 1
//! after `main` prints them.

mod branch;
mod completion;
mod config_cmd;
mod inspect;
mod notes;
mod push;
mod worktree;

pub use completion::completion;

use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::cli::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<ExitCode> {
    match command {
        // Queries
        Command::Describe { rev, format } => inspect::describe(ctx, &rev, format.as_deref()),
        Command::Diff { from, to } => inspect::diff(ctx, &from, &to),
        Command::IsDifferent { from, to, check } => inspect::is_different(ctx, &from, &to, check),
        Command::HasChanges { check } => inspect::has_changes(ctx, check),
        Command::CurrentBranch => inspect::current_branch(ctx),
        Command::BranchExists { name, check } => inspect::branch_exists(ctx, &name, check),
        Command::RevParse { rev } => inspect::rev_parse(ctx, &rev),
        Command::Log { args } => inspect::log(ctx, &args),
        Command::ForkPoint { rev, args } => inspect::fork_point(ctx, &rev, &args),
        Command::IsAncestor {
            ancestor,
            descendant,
            check,
        } => inspect::is_ancestor(ctx, &ancestor, &descendant, check),
        Command::PushRemote { branch } => push::push_remote(ctx, &branch),

        // Working tree and commits
        Command::Apply { patch } => worktree::apply(ctx, patch.as_deref()),
        Command::Commit { message } => worktree::commit(ctx, message),
        Command::Amend { no_edit, message } => worktree::amend(ctx, no_edit, message.as_deref()),
        Command::Add { paths } => worktree::add(ctx, &paths),
        Command::Rebase { base, topic } => worktree::rebase(ctx, &base, &topic),
        Command::Checkout { rev } => worktree::checkout(ctx, &rev),

        // Branches, remotes, notes
        Command::Branch { action } => branch::branch(ctx, action),
        Command::Push {
            branch,
            force,
            set_upstream,
        } => push::push(ctx, branch.as_deref(), force, set_upstream.as_deref()),
        Command::Notes { action } => notes::notes(ctx, action),

        // Setup
        Command::Config => config_cmd::show(ctx),
        Command::Completion { shell } => completion(shell),
    }
}

/// Print or exit-code a yes/no answer.
fn answer(ctx: &Context, value: bool, check: bool) -> Result<ExitCode> {
    if check {
        return Ok(if value {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }
    ctx.printer.value(&value)?;
    Ok(ExitCode::SUCCESS)
}

/// Use `given`, or read all of stdin.
fn text_or_stdin(given: Option<String>) -> Result<String> {
    match given {
        Some(text) => Ok(text),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read from stdin")?;
            Ok(text)
        }
    }
}
