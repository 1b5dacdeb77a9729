//! Integration tests for the gitcmd binary.
//!
//! These tests exercise the full CLI against real Git repos. HOME and
//! XDG_CONFIG_HOME point into a scratch directory so user configuration on
//! the machine running the tests is never read.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// A repository on `main` with one commit, plus an isolated home.
struct Fixture {
    home: TempDir,
    repo: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let home = TempDir::new().unwrap();
        let repo = TempDir::new().unwrap();

        run_git(repo.path(), &["init"]);
        run_git(repo.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
        run_git(repo.path(), &["config", "user.email", "test@example.com"]);
        run_git(repo.path(), &["config", "user.name", "Test User"]);
        run_git(repo.path(), &["config", "commit.gpgsign", "false"]);
        repo.child("README.md").write_str("# Test Repo\n").unwrap();
        run_git(repo.path(), &["add", "README.md"]);
        run_git(repo.path(), &["commit", "-m", "Initial commit"]);

        Self { home, repo }
    }

    /// `gitcmd --cwd <repo>` with an isolated environment.
    fn gitcmd(&self) -> Command {
        self.gitcmd_in(self.repo.path())
    }

    /// `gitcmd --cwd <dir>` with an isolated environment.
    fn gitcmd_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("gitcmd").unwrap();
        cmd.env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env_remove("GITCMD_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--cwd")
            .arg(dir);
        cmd
    }

    fn head(&self) -> String {
        git_stdout(self.repo.path(), &["rev-parse", "HEAD"])
    }
}

fn run_git(dir: &Path, args: &[&str]) {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

fn git_stdout(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");
    assert!(output.status.success(), "git {:?} failed", args);
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

// =============================================================================
// Basics
// =============================================================================

#[test]
fn version_flag_works() {
    Command::cargo_bin("gitcmd")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitcmd"));
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("gitcmd")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fork-point"))
        .stdout(predicate::str::contains("push-remote"));
}

#[test]
fn completion_generates_script() {
    Command::cargo_bin("gitcmd")
        .unwrap()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitcmd"));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn rev_parse_prints_full_hash() {
    let fx = Fixture::new();
    fx.gitcmd()
        .args(["rev-parse", "HEAD"])
        .assert()
        .success()
        .stdout(format!("{}\n", fx.head()));
}

#[test]
fn current_branch_plain_and_json() {
    let fx = Fixture::new();
    fx.gitcmd()
        .arg("current-branch")
        .assert()
        .success()
        .stdout("main\n");
    fx.gitcmd()
        .args(["current-branch", "--json"])
        .assert()
        .success()
        .stdout("\"main\"\n");

    run_git(fx.repo.path(), &["checkout", "--detach", "HEAD"]);
    fx.gitcmd()
        .args(["current-branch", "--json"])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn has_changes_prints_or_checks() {
    let fx = Fixture::new();
    fx.gitcmd()
        .arg("has-changes")
        .assert()
        .success()
        .stdout("false\n");
    fx.gitcmd()
        .args(["has-changes", "--check"])
        .assert()
        .code(1)
        .stdout("");

    fx.repo.child("README.md").write_str("# Changed\n").unwrap();
    fx.gitcmd()
        .args(["has-changes", "--check"])
        .assert()
        .success();
}

#[test]
fn describe_uses_configured_format() {
    let fx = Fixture::new();
    fx.gitcmd()
        .arg("describe")
        .assert()
        .success()
        .stdout("Initial commit\n");

    fx.repo
        .child(".git/gitcmd/config.toml")
        .write_str("describe_format = \"%an <%ae>\"\n")
        .unwrap();
    fx.gitcmd()
        .arg("describe")
        .assert()
        .success()
        .stdout("Test User <test@example.com>\n");

    fx.gitcmd()
        .args(["describe", "HEAD", "--format", "%s"])
        .assert()
        .success()
        .stdout("Initial commit\n");
}

#[test]
fn log_passes_hyphenated_arguments() {
    let fx = Fixture::new();
    fx.gitcmd()
        .args(["log", "--format=%s", "-n", "1"])
        .assert()
        .success()
        .stdout("Initial commit\n");
}

#[test]
fn is_ancestor_check_and_error() {
    let fx = Fixture::new();
    fx.gitcmd()
        .args(["is-ancestor", "HEAD", "HEAD", "--check"])
        .assert()
        .success();

    fx.gitcmd()
        .args(["is-ancestor", "no-such-rev", "HEAD"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"))
        .stderr(predicate::str::contains("merge-base --is-ancestor no-such-rev HEAD"));
}

#[test]
fn branch_exists_answers() {
    let fx = Fixture::new();
    fx.gitcmd()
        .args(["branch-exists", "main"])
        .assert()
        .success()
        .stdout("true\n");
    fx.gitcmd()
        .args(["branch-exists", "nope", "--check"])
        .assert()
        .code(1);
}

// =============================================================================
// Changes
// =============================================================================

#[test]
fn commit_reads_message_from_stdin() {
    let fx = Fixture::new();
    fx.repo.child("a.txt").write_str("a\n").unwrap();

    fx.gitcmd().args(["add", "a.txt"]).assert().success();
    fx.gitcmd()
        .arg("commit")
        .write_stdin("From stdin\n\nWith a body\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Committed "));

    assert_eq!(
        git_stdout(fx.repo.path(), &["log", "-1", "--format=%B"]),
        "From stdin\n\nWith a body"
    );
}

#[test]
fn quiet_suppresses_confirmations() {
    let fx = Fixture::new();
    fx.gitcmd()
        .args(["-q", "branch", "create", "side"])
        .assert()
        .success()
        .stdout("");
    assert_eq!(git_stdout(fx.repo.path(), &["rev-parse", "side"]), fx.head());
}

#[test]
fn branch_create_rejects_invalid_name() {
    let fx = Fixture::new();
    fx.gitcmd()
        .args(["branch", "create", "bad..name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid branch name"));
}

#[test]
fn apply_reads_patch_file() {
    let fx = Fixture::new();
    let patch = fx.home.child("change.patch");
    patch
        .write_str(
            "diff --git a/README.md b/README.md\n\
             --- a/README.md\n\
             +++ b/README.md\n\
             @@ -1 +1,2 @@\n\
             \x20# Test Repo\n\
             +more\n",
        )
        .unwrap();

    fx.gitcmd()
        .arg("apply")
        .arg(patch.path())
        .assert()
        .success();
    fx.repo.child("README.md").assert("# Test Repo\nmore\n");
}

#[test]
fn notes_add_append_show() {
    let fx = Fixture::new();
    fx.gitcmd()
        .args(["notes", "add", "HEAD", "-m", "first"])
        .assert()
        .success();
    fx.gitcmd()
        .args(["notes", "append", "HEAD"])
        .write_stdin("second")
        .assert()
        .success();
    fx.gitcmd()
        .args(["notes", "show", "HEAD"])
        .assert()
        .success()
        .stdout("first\n\nsecond\n");
}

#[test]
fn push_remote_reports_missing_configuration() {
    let fx = Fixture::new();
    fx.gitcmd()
        .args(["push-remote", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No push remote configured for 'main'"));

    run_git(fx.repo.path(), &["config", "branch.main.remote", "origin"]);
    fx.gitcmd()
        .args(["push-remote", "main"])
        .assert()
        .success()
        .stdout("origin\n");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn missing_git_program_is_reported() {
    let fx = Fixture::new();
    fx.gitcmd()
        .args(["--git", "gitcmd-definitely-not-installed", "rev-parse", "HEAD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to start"));
}

#[test]
fn config_shows_effective_values() {
    let fx = Fixture::new();
    let global = fx.home.child("custom.toml");
    global.write_str("git_program = \"git\"\n").unwrap();

    fx.gitcmd()
        .env("GITCMD_CONFIG", global.path())
        .args(["config", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"git_program\": \"git\""))
        .stdout(predicate::str::contains("\"describe_format\": \"%B\""))
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn repo_config_applies_from_subdirectory() {
    let fx = Fixture::new();
    fx.repo
        .child(".git/gitcmd/config.toml")
        .write_str("describe_format = \"%s\"\n")
        .unwrap();
    let nested = fx.repo.child("sub/dir");
    nested.create_dir_all().unwrap();

    fx.gitcmd_in(nested.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("describe_format = \"%s\""))
        .stdout(predicate::str::contains("# repo: (none)").not());
}

#[test]
fn repo_config_applies_from_linked_worktree() {
    let fx = Fixture::new();
    fx.repo
        .child(".git/gitcmd/config.toml")
        .write_str("describe_format = \"%an\"\n")
        .unwrap();
    let worktree = fx.home.child("wt");
    run_git(fx.repo.path(), &["worktree", "add", worktree.path().to_str().unwrap()]);

    fx.gitcmd_in(worktree.path())
        .arg("describe")
        .assert()
        .success()
        .stdout("Test User\n");
}

#[test]
fn invalid_config_fails_fast() {
    let fx = Fixture::new();
    fx.repo
        .child(".git/gitcmd/config.toml")
        .write_str("unknown_key = 1\n")
        .unwrap();

    fx.gitcmd()
        .args(["rev-parse", "HEAD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
