//! completion command - print a shell completion script for gitcmd

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::args::{Cli, Shell};

pub fn completion(shell: Shell) -> Result<ExitCode> {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    let mut out = io::stdout().lock();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, &bin, &mut out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, &bin, &mut out),
        Shell::Fish => generate(shells::Fish, &mut cmd, &bin, &mut out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, &bin, &mut out),
    }
    Ok(ExitCode::SUCCESS)
}
