//! git::error
//!
//! The failure channel shared by every git operation.
//!
//! A git invocation fails in one of a few ways: the process ran and exited
//! unsuccessfully, it could not be started, its streams broke, or it
//! succeeded but printed something that is not a valid value. "Not found"
//! answers from git (unknown ref, no fork point, unset config key) arrive as
//! [`GitError::CommandFailed`] like any other non-zero exit; callers tell
//! them apart by context and, if needed, by [`GitError::exit_code`].

use std::process::ExitStatus;

use thiserror::Error;

use crate::core::types::TypeError;

/// Errors from git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// git exited unsuccessfully.
    ///
    /// Renders as `<status>: <command line>\n<output>` so a failure can be
    /// diagnosed from the message alone.
    #[error("{status}: {command}\n{output}")]
    CommandFailed {
        /// Exit status reported by the process
        status: ExitStatus,
        /// The command line as executed
        command: String,
        /// Captured stdout followed by captured stderr
        output: String,
    },

    /// The process could not be started.
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to the child's streams failed.
    #[error("i/o error while running `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// git succeeded but printed a value that failed validation.
    #[error("unexpected output from `{command}`: {source}")]
    InvalidOutput {
        command: String,
        #[source]
        source: TypeError,
    },
}

impl GitError {
    /// Exit code of a failed command, if the process ran and exited normally.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitcmd::git::Git;
    ///
    /// let git = Git::new(".");
    /// if let Err(err) = git.rev_parse("no-such-ref") {
    ///     assert_eq!(err.exit_code(), Some(128));
    /// }
    /// ```
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GitError::CommandFailed { status, .. } => status.code(),
            _ => None,
        }
    }

    /// Output captured before the failure, if any was captured.
    pub fn output(&self) -> Option<&str> {
        match self {
            GitError::CommandFailed { output, .. } => Some(output),
            _ => None,
        }
    }

    /// The command line that failed.
    pub fn command(&self) -> &str {
        match self {
            GitError::CommandFailed { command, .. }
            | GitError::Spawn { command, .. }
            | GitError::Io { command, .. }
            | GitError::InvalidOutput { command, .. } => command,
        }
    }
}
