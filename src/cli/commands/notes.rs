//! notes command - attach, extend, or show commit notes

use std::process::ExitCode;

use anyhow::{Context as _, Result};

use super::text_or_stdin;
use crate::cli::args::NotesAction;
use crate::cli::Context;

pub fn notes(ctx: &Context, action: NotesAction) -> Result<ExitCode> {
    let git = ctx.git();
    match action {
        NotesAction::Add { object, message } => {
            let note = text_or_stdin(message)?;
            git.force_add_notes(&object, &note)
                .with_context(|| format!("Failed to set note on '{}'", object))?;
        }
        NotesAction::Append { object, message } => {
            let note = text_or_stdin(message)?;
            git.append_notes(&object, &note)
                .with_context(|| format!("Failed to append note on '{}'", object))?;
        }
        NotesAction::Show { object } => {
            let note = git
                .show_notes(&object)
                .with_context(|| format!("No note found on '{}'", object))?;
            ctx.printer.value(&note)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
