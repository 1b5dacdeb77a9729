//! cli
//!
//! Command-line interface layer for gitcmd.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve configuration and build the [`Git`] handle
//! - Install the log subscriber
//! - Delegate to command handlers
//!
//! The CLI layer is thin: every handler is one call into [`crate::git`]
//! plus output formatting.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::git::Git;
use crate::ui::output::{Printer, Verbosity};

/// Everything a command handler needs.
#[derive(Debug)]
pub struct Context {
    /// Directory git runs in
    pub cwd: PathBuf,
    /// Effective configuration
    pub config: Config,
    /// `--git` override, if given
    pub git_program: Option<String>,
    /// Output settings
    pub printer: Printer,
}

impl Context {
    /// Handle on the repository at `cwd` using the effective git program.
    pub fn git(&self) -> Git {
        let program = self
            .git_program
            .clone()
            .unwrap_or_else(|| self.config.git_program());
        Git::with_program(&self.cwd, program)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    init_logging(verbosity);

    let cwd = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };
    let config = load_config(&cwd, cli.git_program.as_deref())?;

    let ctx = Context {
        cwd,
        config,
        git_program: cli.git_program,
        printer: Printer {
            verbosity,
            json: cli.json,
        },
    };

    commands::dispatch(cli.command, &ctx)
}

/// Load the global file, then ask git where the repository keeps its
/// shared directory and layer the repo file on top.
///
/// Outside a repository there is no repo file; the command itself reports
/// that once it runs git.
fn load_config(cwd: &Path, git_program: Option<&str>) -> Result<Config> {
    let global = Config::load(None).context("Failed to load configuration")?;
    let program = git_program
        .map(str::to_string)
        .unwrap_or_else(|| global.git_program());

    let git_dir = match Git::with_program(cwd, program).common_dir() {
        Ok(dir) => Some(dir),
        Err(err) => {
            debug!(error = %err, "no repository config");
            None
        }
    };
    Config::load(git_dir.as_deref()).context("Failed to load configuration")
}

/// Send `tracing` events to stderr. `RUST_LOG` overrides the level implied
/// by the verbosity flags.
fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    // A subscriber may already be set when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
