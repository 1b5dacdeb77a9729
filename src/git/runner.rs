//! git::runner
//!
//! The subprocess primitive every git operation is built on.
//!
//! # Variants
//!
//! - [`CommandRunner::run`]: capture output, trimmed stdout on success
//! - [`CommandRunner::run_raw`]: capture output, untrimmed stdout on success
//! - [`CommandRunner::run_with_input`]: stream a byte source into stdin
//! - [`CommandRunner::run_in_terminal`]: inherit the caller's terminal
//! - [`CommandRunner::output`]: capture output without judging the exit code
//!
//! # Invariants
//!
//! - Every invocation runs in the runner's bound directory, never the
//!   process working directory.
//! - Child streams are drained and closed before any variant returns.
//! - A non-zero exit becomes [`GitError::CommandFailed`] carrying the status,
//!   the command line, and the captured output.

use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

use tracing::{debug, warn};

use super::GitError;

/// Program used when no override is configured.
pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// One invocation of the git executable.
///
/// Immutable once built. `Display` reconstructs the command line as it is
/// executed, which is what error messages embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
    dir: PathBuf,
}

impl Invocation {
    /// The argument list, excluding the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Directory the process runs in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.dir);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Everything a finished child produced.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Stdout followed by stderr, lossily decoded.
    pub fn combined(&self) -> String {
        let mut text = String::from_utf8_lossy(&self.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&self.stderr));
        text
    }

    /// Stdout, lossily decoded, untouched.
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Stdout with surrounding whitespace removed.
    pub fn stdout_trimmed(&self) -> String {
        String::from_utf8_lossy(&self.stdout).trim().to_string()
    }
}

/// Launches git in a fixed directory.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    work_dir: PathBuf,
}

impl CommandRunner {
    /// Runner for `git` on `PATH`, bound to `work_dir`.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: DEFAULT_GIT_PROGRAM.to_string(),
            work_dir: work_dir.into(),
        }
    }

    /// Replace the executable (a name resolved on `PATH`, or a path).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build an invocation for `args`.
    pub fn invocation<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            program: self.program.clone(),
            args: args.into_iter().map(Into::into).collect(),
            dir: self.work_dir.clone(),
        }
    }

    /// Run and capture output, whatever the exit code.
    ///
    /// Only a failure to start the process or to read its streams is an
    /// error here. Callers that map exit codes to values start from this.
    pub fn output(&self, invocation: &Invocation) -> Result<CommandOutput, GitError> {
        debug!(command = %invocation, dir = %invocation.dir.display(), "running git");

        let output = invocation
            .command()
            .stdin(Stdio::null())
            .output()
            .map_err(|source| GitError::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }

    /// Run `args` and return stdout trimmed of surrounding whitespace.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let invocation = self.invocation(args.iter().copied());
        let output = self.output(&invocation)?;
        Ok(check(&invocation, output)?.stdout_trimmed())
    }

    /// Run `args` and return stdout exactly as printed.
    pub fn run_raw(&self, args: &[&str]) -> Result<String, GitError> {
        let invocation = self.invocation(args.iter().copied());
        let output = self.output(&invocation)?;
        Ok(check(&invocation, output)?.stdout_text())
    }

    /// Run `args` with `input` streamed into stdin; returns trimmed stdout.
    ///
    /// stdin is fed from a helper thread while this thread drains stdout and
    /// stderr, so neither side can fill a pipe and stall the other. stdin is
    /// closed once `input` is exhausted. If the child exits before reading
    /// all of its input, the exit status is what gets reported.
    pub fn run_with_input<R>(&self, args: &[&str], mut input: R) -> Result<String, GitError>
    where
        R: Read + Send,
    {
        let invocation = self.invocation(args.iter().copied());
        debug!(
            command = %invocation,
            dir = %invocation.dir.display(),
            "running git with piped stdin"
        );

        let mut child = invocation
            .command()
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| GitError::Spawn {
                command: invocation.to_string(),
                source,
            })?;
        let stdin = child.stdin.take();

        let (fed, waited) = thread::scope(|scope| {
            let feeder = scope.spawn(move || -> io::Result<u64> {
                match stdin {
                    // Dropping the handle at the end of this arm sends EOF.
                    Some(mut stdin) => io::copy(&mut input, &mut stdin),
                    None => Ok(0),
                }
            });
            let waited = child.wait_with_output();
            let fed = feeder
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (fed, waited)
        });

        let output = waited.map_err(|source| GitError::Io {
            command: invocation.to_string(),
            source,
        })?;
        let output = check(
            &invocation,
            CommandOutput {
                status: output.status,
                stdout: output.stdout,
                stderr: output.stderr,
            },
        )?;

        match fed {
            Err(err) if err.kind() != io::ErrorKind::BrokenPipe => Err(GitError::Io {
                command: invocation.to_string(),
                source: err,
            }),
            _ => Ok(output.stdout_trimmed()),
        }
    }

    /// Run `args` attached to the caller's terminal and wait for it.
    ///
    /// Used when git launches an editor. Nothing is captured, so a failure
    /// carries an empty output.
    pub fn run_in_terminal(&self, args: &[&str]) -> Result<(), GitError> {
        let invocation = self.invocation(args.iter().copied());
        debug!(command = %invocation, dir = %invocation.dir.display(), "running git in terminal");

        let status = invocation
            .command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| GitError::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            warn!(command = %invocation, %status, "git command failed");
            Err(GitError::CommandFailed {
                status,
                command: invocation.to_string(),
                output: String::new(),
            })
        }
    }
}

/// Turn a non-zero exit into [`GitError::CommandFailed`].
pub(crate) fn check(
    invocation: &Invocation,
    output: CommandOutput,
) -> Result<CommandOutput, GitError> {
    if output.status.success() {
        return Ok(output);
    }
    Err(reject(invocation, &output))
}

/// Build the [`GitError::CommandFailed`] for a finished child.
pub(crate) fn reject(invocation: &Invocation, output: &CommandOutput) -> GitError {
    warn!(command = %invocation, status = %output.status, "git command failed");
    GitError::CommandFailed {
        status: output.status,
        command: invocation.to_string(),
        output: output.combined(),
    }
}
