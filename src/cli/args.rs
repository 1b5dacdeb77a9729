//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--cwd <path>`: Run git in that directory
//! - `--git <program>`: git executable to launch
//! - `--debug`: Enable debug logging of every git invocation
//! - `--quiet` / `-q`: Results and errors only
//! - `--json`: Print query results as JSON

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitcmd - typed git operations for stacked-branch tooling
#[derive(Parser, Debug)]
#[command(name = "gitcmd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run git in this directory instead of the current one
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// git executable to launch (overrides config)
    #[arg(long = "git", global = true, value_name = "PROGRAM")]
    pub git_program: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Results and errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print query results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a commit rendered with a --format string
    Describe {
        /// Revision to describe
        #[arg(default_value = "HEAD")]
        rev: String,

        /// Format placeholders, e.g. %B (message) or %N (notes)
        #[arg(long)]
        format: Option<String>,
    },

    /// Print the patch between two revisions
    Diff { from: String, to: String },

    /// Report whether two revisions have different trees
    IsDifferent {
        from: String,
        to: String,

        /// Answer with the exit status instead of printing
        #[arg(long)]
        check: bool,
    },

    /// Apply a patch to the working tree (from a file or stdin)
    Apply {
        /// Patch file; reads stdin when omitted
        patch: Option<PathBuf>,
    },

    /// Report whether tracked files have uncommitted changes
    HasChanges {
        /// Answer with the exit status instead of printing
        #[arg(long)]
        check: bool,
    },

    /// Print the checked-out branch (empty on a detached HEAD)
    CurrentBranch,

    /// Report whether a branch (or any revision) exists
    BranchExists {
        name: String,

        /// Answer with the exit status instead of printing
        #[arg(long)]
        check: bool,
    },

    /// Commit the index
    Commit {
        /// Commit message; read from stdin when omitted
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Amend the last commit (opens the editor unless told otherwise)
    Amend {
        /// Keep the existing message
        #[arg(long, conflicts_with = "message")]
        no_edit: bool,

        /// Replace the message
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Check out a revision
    Checkout { rev: String },

    /// Create, move, or delete branches
    Branch {
        #[command(subcommand)]
        action: BranchAction,
    },

    /// Print the full hash of a revision
    RevParse { rev: String },

    /// Stage paths
    Add {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Rebase a topic branch onto a base
    Rebase { base: String, topic: String },

    /// Run git log with the given arguments
    #[command(
        after_help = "\
EXAMPLES:
    gitcmd log -- --reverse --format=%H
    gitcmd log -- --oneline main..HEAD"
    )]
    Log {
        /// Arguments passed to git log
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Print the fork point of the current branch (or a named one) from a revision
    ForkPoint {
        rev: String,

        /// Extra merge-base arguments, usually the branch to inspect
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Report whether one revision is an ancestor of another
    IsAncestor {
        ancestor: String,
        descendant: String,

        /// Answer with the exit status instead of printing
        #[arg(long)]
        check: bool,
    },

    /// Print the remote a branch pushes to
    PushRemote { branch: String },

    /// Push the current branch, or a named branch to its push remote
    #[command(
        after_help = "\
EXAMPLES:
    gitcmd push                               # plain git push
    gitcmd push stack/part-2                  # to the branch's push remote
    gitcmd push stack/part-2 --force          # same, forced
    gitcmd push stack/part-2 --set-upstream origin"
    )]
    Push {
        /// Branch to push without checking it out
        branch: Option<String>,

        /// Force-push the branch
        #[arg(short, long, requires = "branch", conflicts_with = "set_upstream")]
        force: bool,

        /// Push to this remote and record it as the branch's upstream
        #[arg(short = 'u', long, value_name = "REMOTE", requires = "branch")]
        set_upstream: Option<String>,
    },

    /// Attach, extend, or show commit notes
    Notes {
        #[command(subcommand)]
        action: NotesAction,
    },

    /// Show the effective configuration and where it came from
    Config,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Branch subcommands.
#[derive(Subcommand, Debug)]
pub enum BranchAction {
    /// Create a branch at HEAD
    Create {
        name: String,

        /// Switch to the new branch
        #[arg(short, long)]
        switch: bool,
    },
    /// Create or move a branch to a revision without switching
    Force { name: String, rev: String },
    /// Delete a branch even if unmerged
    Delete { name: String },
}

/// Notes subcommands.
#[derive(Subcommand, Debug)]
pub enum NotesAction {
    /// Replace the note on an object
    Add {
        object: String,

        /// Note text; read from stdin when omitted
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Append to the note on an object
    Append {
        object: String,

        /// Note text; read from stdin when omitted
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Print the note on an object
    Show { object: String },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_passes_hyphen_args_through() {
        let cli = Cli::try_parse_from(["gitcmd", "log", "--reverse", "--format=%H"]).unwrap();
        match cli.command {
            Command::Log { args } => assert_eq!(args, ["--reverse", "--format=%H"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn force_push_needs_a_branch() {
        assert!(Cli::try_parse_from(["gitcmd", "push", "--force"]).is_err());
        assert!(Cli::try_parse_from(["gitcmd", "push", "topic", "--force"]).is_ok());
    }

    #[test]
    fn amend_flags_conflict() {
        assert!(Cli::try_parse_from(["gitcmd", "amend", "--no-edit", "-m", "x"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["gitcmd", "has-changes", "--cwd", "/tmp", "--json"]).unwrap();
        assert_eq!(cli.cwd, Some(PathBuf::from("/tmp")));
        assert!(cli.json);
    }
}
