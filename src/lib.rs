//! gitcmd - typed wrappers around the git command line
//!
//! gitcmd gives stacked-branch tooling (branch splitting, stacked PR
//! submission) a small, typed vocabulary of git operations: describe, diff,
//! apply, commit, amend, branch management, rev-parse, fork-point and
//! ancestry checks, push-remote lookup, push, and notes.
//!
//! Every operation is one `git` subprocess. All version-control behavior
//! lives in git itself; this crate shapes the arguments, trims output, and
//! reports failures with the command line and captured output attached.
//!
//! # Architecture
//!
//! - [`git`] - The subprocess runner and the typed operations over it
//! - [`core`] - Strong types and configuration
//! - [`cli`] - The `gitcmd` command-line front end
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```no_run
//! use gitcmd::git::Git;
//!
//! let git = Git::new("/path/to/repo");
//! let fork = git.fork_point("main", &[])?;
//! let patch = git.diff(fork.as_str(), "HEAD")?;
//! println!("{patch}");
//! # Ok::<(), gitcmd::git::GitError>(())
//! ```

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
