//! git::interface
//!
//! The typed operation surface over the git CLI.
//!
//! Each method assembles a fixed argument shape and hands it to the
//! [`CommandRunner`]. Flag choices such as `--no-color`, `--recount` and
//! `-F -` are part of the contract: callers parse what comes back.
//!
//! # Example
//!
//! ```no_run
//! use gitcmd::core::types::BranchName;
//! use gitcmd::git::Git;
//!
//! let git = Git::new("/path/to/repo");
//! let head = git.rev_parse("HEAD")?;
//! let part = BranchName::new("stack/part-1").unwrap();
//! git.create_branch_forced(&part, head.as_str())?;
//! if git.has_changes()? {
//!     git.add(&["."])?;
//!     git.commit("split: part 1")?;
//! }
//! # Ok::<(), gitcmd::git::GitError>(())
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use super::runner::{self, CommandRunner};
use super::GitError;
use crate::core::types::{BranchName, Oid};

/// Handle on one repository directory.
///
/// Holds no repository state of its own; every method is a fresh git
/// process run in [`Git::work_dir`]. Values are cheap to clone and
/// independent of the process working directory.
#[derive(Debug, Clone)]
pub struct Git {
    runner: CommandRunner,
}

impl Git {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Operate on the repository containing `work_dir`, using `git` on `PATH`.
    ///
    /// Nothing is checked up front. A directory that is not inside a
    /// repository surfaces as a failure from the first operation.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner: CommandRunner::new(work_dir),
        }
    }

    /// Same as [`Git::new`] with a specific git executable.
    pub fn with_program(work_dir: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            runner: CommandRunner::new(work_dir).with_program(program),
        }
    }

    /// Directory every invocation runs in.
    pub fn work_dir(&self) -> &Path {
        self.runner.work_dir()
    }

    /// The underlying runner, for invocations not covered here.
    pub fn runner(&self) -> &CommandRunner {
        &self.runner
    }

    /// Run git with arbitrary arguments and return trimmed stdout.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        self.runner.run(args)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Render `rev` with a `--format` string, e.g. `%B` for the message or
    /// `%N` for its notes.
    pub fn describe_ref(&self, rev: &str, format: &str) -> Result<String, GitError> {
        let format = format!("--format={}", format);
        self.runner
            .run(&["show", rev, "--no-patch", "--no-color", &format])
    }

    /// Patch between two revisions, exactly as git prints it.
    pub fn diff(&self, from: &str, to: &str) -> Result<String, GitError> {
        self.runner.run_raw(&["diff", from, to, "-p", "--no-color"])
    }

    /// Whether the trees of two revisions differ.
    pub fn is_different(&self, from: &str, to: &str) -> Result<bool, GitError> {
        Ok(!self.diff(from, to)?.is_empty())
    }

    /// Whether the working tree or index holds uncommitted changes to
    /// tracked files. Untracked files do not count.
    pub fn has_changes(&self) -> Result<bool, GitError> {
        let status = self.runner.run_raw(&["status", "-s"])?;
        Ok(status_has_changes(&status))
    }

    /// Name of the checked-out branch, or `None` on a detached HEAD.
    pub fn current_branch(&self) -> Result<Option<BranchName>, GitError> {
        let args = ["branch", "--show-current"];
        let name = self.runner.run(&args)?;
        if name.is_empty() {
            return Ok(None);
        }
        BranchName::new(name)
            .map(Some)
            .map_err(|source| GitError::InvalidOutput {
                command: self.runner.invocation(args).to_string(),
                source,
            })
    }

    /// Whether `name` resolves to anything at all.
    ///
    /// Any failure, including a broken repository, answers `false`.
    pub fn branch_exists(&self, name: &str) -> bool {
        self.rev_parse(name).is_ok()
    }

    /// Full object id of `rev`.
    pub fn rev_parse(&self, rev: &str) -> Result<Oid, GitError> {
        self.oid_from(&["rev-parse", "--verify", rev])
    }

    /// Absolute path of the repository's shared git directory.
    ///
    /// Resolves the same directory from any subdirectory and from every
    /// linked worktree.
    pub fn common_dir(&self) -> Result<PathBuf, GitError> {
        let dir = self
            .runner
            .run(&["rev-parse", "--path-format=absolute", "--git-common-dir"])?;
        Ok(PathBuf::from(dir))
    }

    /// `git log` with caller-chosen arguments; output is trimmed, not parsed.
    pub fn log(&self, args: &[&str]) -> Result<String, GitError> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push("log");
        full.extend_from_slice(args);
        self.runner.run(&full)
    }

    /// Point where the current branch (or the one named in `args`) forked
    /// from `rev`, using the reflog.
    ///
    /// Fails when no fork point exists, which includes the fully merged case.
    pub fn fork_point(&self, rev: &str, args: &[&str]) -> Result<Oid, GitError> {
        let mut full = vec!["merge-base", "--fork-point", rev];
        full.extend_from_slice(args);
        self.oid_from(&full)
    }

    /// Whether `ancestor` is reachable from `descendant`.
    ///
    /// git answers through the exit code: 0 means yes, 1 means no. Any other
    /// code, such as 128 for an unknown revision, is an error.
    pub fn is_ancestor(&self, ancestor: &str, descendant: &str) -> Result<bool, GitError> {
        let invocation = self
            .runner
            .invocation(["merge-base", "--is-ancestor", ancestor, descendant]);
        let output = self.runner.output(&invocation)?;
        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(runner::reject(&invocation, &output)),
        }
    }

    // =========================================================================
    // Working tree and commits
    // =========================================================================

    /// Apply a patch to the working tree without staging or committing it.
    ///
    /// `--recount` lets hunks with stale line counts apply.
    pub fn apply_patch<R: Read + Send>(&self, patch: R) -> Result<(), GitError> {
        self.runner
            .run_with_input(&["apply", "--recount", "-"], patch)?;
        Ok(())
    }

    /// Stage `paths`.
    pub fn add<S: AsRef<str>>(&self, paths: &[S]) -> Result<(), GitError> {
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(AsRef::as_ref));
        self.runner.run(&args)?;
        Ok(())
    }

    /// Commit the index with `message`, passed on stdin verbatim.
    pub fn commit(&self, message: &str) -> Result<(), GitError> {
        self.runner
            .run_with_input(&["commit", "-F", "-"], message.as_bytes())?;
        Ok(())
    }

    /// Amend HEAD, letting git open the configured editor on this terminal.
    ///
    /// Blocks until the editor exits.
    pub fn amend(&self) -> Result<(), GitError> {
        self.runner.run_in_terminal(&["commit", "--amend"])
    }

    /// Amend HEAD and keep its message.
    pub fn amend_no_edit(&self) -> Result<(), GitError> {
        self.runner.run(&["commit", "--amend", "--no-edit"])?;
        Ok(())
    }

    /// Amend HEAD and replace its message.
    pub fn amend_with_message(&self, message: &str) -> Result<(), GitError> {
        self.runner.run(&["commit", "--amend", "-m", message])?;
        Ok(())
    }

    /// Rebase `topic` onto `base`.
    pub fn rebase(&self, base: &str, topic: &str) -> Result<(), GitError> {
        self.runner.run(&["rebase", base, topic])?;
        Ok(())
    }

    // =========================================================================
    // Branches
    // =========================================================================

    /// Check out `rev`.
    pub fn checkout(&self, rev: &str) -> Result<(), GitError> {
        self.runner.run(&["checkout", rev])?;
        Ok(())
    }

    /// Create `name` at HEAD and switch to it.
    pub fn create_and_switch_to_branch(&self, name: &BranchName) -> Result<(), GitError> {
        self.runner.run(&["checkout", "-b", name.as_str()])?;
        Ok(())
    }

    /// Create `name` at HEAD without switching.
    pub fn create_branch(&self, name: &BranchName) -> Result<(), GitError> {
        self.runner.run(&["branch", name.as_str()])?;
        Ok(())
    }

    /// Point `name` at `rev`, creating or moving it, without switching.
    pub fn create_branch_forced(&self, name: &BranchName, rev: &str) -> Result<(), GitError> {
        self.runner.run(&["branch", "-f", name.as_str(), rev])?;
        Ok(())
    }

    /// Delete `name` even if it is not merged.
    pub fn force_delete_branch(&self, name: &BranchName) -> Result<(), GitError> {
        self.runner.run(&["branch", "-D", name.as_str()])?;
        Ok(())
    }

    // =========================================================================
    // Remotes
    // =========================================================================

    /// Remote that `branch` pushes to by default.
    ///
    /// `branch.<name>.pushRemote` wins over `branch.<name>.remote`. Fails with
    /// the second lookup's error when neither is set.
    pub fn push_remote_for_branch(&self, branch: &BranchName) -> Result<String, GitError> {
        let push_remote = format!("branch.{}.pushRemote", branch);
        if let Ok(remote) = self.config_get(&push_remote) {
            return Ok(remote);
        }
        self.config_get(&format!("branch.{}.remote", branch))
    }

    /// Plain `git push`.
    pub fn push(&self) -> Result<(), GitError> {
        self.runner.run(&["push"])?;
        Ok(())
    }

    /// Push `branch` to its default push remote without checking it out.
    pub fn push_branch(&self, branch: &BranchName) -> Result<(), GitError> {
        let remote = self.push_remote_for_branch(branch)?;
        self.runner.run(&["push", &remote, branch.as_str()])?;
        Ok(())
    }

    /// Force-push `branch` to its default push remote.
    pub fn force_push_branch(&self, branch: &BranchName) -> Result<(), GitError> {
        let remote = self.push_remote_for_branch(branch)?;
        self.runner.run(&["push", "-f", &remote, branch.as_str()])?;
        Ok(())
    }

    /// Push `branch` to `remote` and record it as the upstream.
    pub fn push_and_set_upstream(&self, remote: &str, branch: &BranchName) -> Result<(), GitError> {
        self.runner.run(&["push", "-u", remote, branch.as_str()])?;
        Ok(())
    }

    // =========================================================================
    // Notes
    // =========================================================================

    /// Replace the note on `object` with `note`.
    pub fn force_add_notes(&self, object: &str, note: &str) -> Result<(), GitError> {
        self.runner.run_with_input(
            &["notes", "add", "--force", "--file", "-", object],
            note.as_bytes(),
        )?;
        Ok(())
    }

    /// Append `note` to the note on `object`, separated by a blank line.
    pub fn append_notes(&self, object: &str, note: &str) -> Result<(), GitError> {
        self.runner
            .run_with_input(&["notes", "append", "--file", "-", object], note.as_bytes())?;
        Ok(())
    }

    /// The note on `object`.
    pub fn show_notes(&self, object: &str) -> Result<String, GitError> {
        self.runner.run(&["notes", "show", object])
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn config_get(&self, key: &str) -> Result<String, GitError> {
        self.runner.run(&["config", "--get", key])
    }

    fn oid_from(&self, args: &[&str]) -> Result<Oid, GitError> {
        let text = self.runner.run(args)?;
        Oid::new(text).map_err(|source| GitError::InvalidOutput {
            command: self.runner.invocation(args.iter().copied()).to_string(),
            source,
        })
    }
}

/// Scan `git status -s` output for changes that are not untracked files.
///
/// Every non-blank line whose first non-space character is not `?` counts,
/// so conflicts, renames, and staged or unstaged edits all register.
///
/// # Example
///
/// ```
/// use gitcmd::git::status_has_changes;
///
/// assert!(!status_has_changes("?? scratch.txt\n"));
/// assert!(status_has_changes(" M src/lib.rs\n?? scratch.txt\n"));
/// assert!(!status_has_changes(""));
/// ```
pub fn status_has_changes(status: &str) -> bool {
    status
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .any(|line| !line.starts_with('?'))
}
