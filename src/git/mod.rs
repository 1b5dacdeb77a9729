//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! Every operation launches the `git` executable as a subprocess, bound to an
//! explicit repository directory, and waits for it. Diffing, merge-base
//! computation, notes storage and the rest stay inside git; this module only
//! shapes arguments, trims output, and formats failures.
//!
//! - [`runner`] - The subprocess primitive ([`CommandRunner`], [`Invocation`])
//! - [`Git`] - Typed operations composed over the runner
//! - [`GitError`] - The shared failure channel
//!
//! # Invariants
//!
//! - The process working directory is never consulted
//! - Flag shapes (`--no-color`, `--recount`, `-F -`) are fixed per operation
//! - Failures are never retried
//!
//! # Example
//!
//! ```no_run
//! use gitcmd::git::Git;
//!
//! let git = Git::new("/path/to/repo");
//! if git.is_ancestor("main", "HEAD")? {
//!     println!("{}", git.log(&["--oneline", "main..HEAD"])?);
//! }
//! # Ok::<(), gitcmd::git::GitError>(())
//! ```

mod error;
mod interface;
pub mod runner;

pub use error::GitError;
pub use interface::{status_has_changes, Git};
pub use runner::{CommandOutput, CommandRunner, Invocation, DEFAULT_GIT_PROGRAM};
