//! config command - show the effective configuration

use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use crate::cli::Context;

#[derive(Serialize)]
struct EffectiveConfig {
    git_program: String,
    describe_format: String,
    global_file: Option<String>,
    repo_file: Option<String>,
}

pub fn show(ctx: &Context) -> Result<ExitCode> {
    let effective = EffectiveConfig {
        git_program: ctx
            .git_program
            .clone()
            .unwrap_or_else(|| ctx.config.git_program()),
        describe_format: ctx.config.describe_format(),
        global_file: ctx
            .config
            .global_config_loaded_from()
            .map(|p| p.display().to_string()),
        repo_file: ctx
            .config
            .repo_config_loaded_from()
            .map(|p| p.display().to_string()),
    };

    if ctx.printer.json {
        println!("{}", serde_json::to_string_pretty(&effective)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("git_program = {:?}", effective.git_program);
    println!("describe_format = {:?}", effective.describe_format);
    println!(
        "# global: {}",
        effective.global_file.as_deref().unwrap_or("(none)")
    );
    println!(
        "# repo: {}",
        effective.repo_file.as_deref().unwrap_or("(none)")
    );
    Ok(ExitCode::SUCCESS)
}
