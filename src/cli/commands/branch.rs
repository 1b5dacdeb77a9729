//! branch command - create, move, or delete branches

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use crate::cli::args::BranchAction;
use crate::cli::Context;
use crate::core::types::BranchName;

pub fn branch(ctx: &Context, action: BranchAction) -> Result<ExitCode> {
    let git = ctx.git();
    match action {
        BranchAction::Create { name, switch } => {
            let name = BranchName::new(name).context("Invalid branch name")?;
            let created = if switch {
                git.create_and_switch_to_branch(&name)
            } else {
                git.create_branch(&name)
            };
            created.with_context(|| format!("Failed to create branch '{}'", name))?;
            ctx.printer.success(format!("Created {}", name));
        }
        BranchAction::Force { name, rev } => {
            let name = BranchName::new(name).context("Invalid branch name")?;
            git.create_branch_forced(&name, &rev)
                .with_context(|| format!("Failed to point '{}' at '{}'", name, rev))?;
            ctx.printer.success(format!("{} -> {}", name, rev));
        }
        BranchAction::Delete { name } => {
            let name = BranchName::new(name).context("Invalid branch name")?;
            git.force_delete_branch(&name)
                .with_context(|| format!("Failed to delete branch '{}'", name))?;
            ctx.printer.success(format!("Deleted {}", name));
        }
    }
    Ok(ExitCode::SUCCESS)
}
