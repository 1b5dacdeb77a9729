//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Two scopes, same keys:
//! - **Global**: user-level settings
//! - **Repo**: overrides for one repository
//!
//! # Precedence
//!
//! Later overrides earlier:
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! First existing file wins:
//! 1. `$GITCMD_CONFIG`
//! 2. `$XDG_CONFIG_HOME/gitcmd/config.toml`
//! 3. `~/.gitcmd/config.toml`
//!
//! # Repo Config Location
//!
//! `gitcmd/config.toml` under the repository's common git directory, as
//! reported by [`crate::git::Git::common_dir`]. Subdirectories and linked
//! worktrees of one repository share the file.
//!
//! Only [`Config::load`] looks at the environment. The git layer itself
//! never reads configuration; the CLI resolves it and passes values in.
//!
//! # Example
//!
//! ```no_run
//! use gitcmd::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/repo/.git"))).unwrap();
//! println!("git: {}", config.git_program());
//! println!("describe format: {}", config.describe_format());
//! ```

pub mod schema;

pub use schema::ConfigFile;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::git::DEFAULT_GIT_PROGRAM;

/// Format used by `describe` when none is configured: the raw commit message.
pub const DEFAULT_DESCRIBE_FORMAT: &str = "%B";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global file contents (default if none found)
    pub global: ConfigFile,
    /// Repo file contents, if one was found
    pub repo: Option<ConfigFile>,
    global_path: Option<PathBuf>,
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Missing files are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read, parsed, or
    /// validated.
    pub fn load(git_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let global_path = Self::global_candidates().into_iter().find(|p| p.exists());
        Self::load_from(global_path.as_deref(), git_dir)
    }

    /// Load from an explicit global file and git directory.
    pub fn load_from(
        global_file: Option<&Path>,
        git_dir: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let global = match global_file {
            Some(path) => Self::read_file(path)?,
            None => ConfigFile::default(),
        };

        let repo_file = git_dir
            .map(Self::repo_config_path)
            .filter(|path| path.exists());
        let repo = repo_file.as_deref().map(Self::read_file).transpose()?;

        Ok(Config {
            global,
            repo,
            global_path: global_file.map(Path::to_path_buf),
            repo_path: repo_file,
        })
    }

    /// Global locations in search order.
    fn global_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(path) = std::env::var_os("GITCMD_CONFIG") {
            candidates.push(PathBuf::from(path));
        }
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            candidates.push(PathBuf::from(xdg).join("gitcmd/config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".gitcmd/config.toml"));
        }
        candidates
    }

    fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;
        Ok(file)
    }

    /// Repo config path for a git directory.
    pub fn repo_config_path(git_dir: &Path) -> PathBuf {
        git_dir.join("gitcmd/config.toml")
    }

    fn effective(&self) -> ConfigFile {
        match &self.repo {
            Some(repo) => self.global.merged_with(repo),
            None => self.global.clone(),
        }
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// git executable. Defaults to `git`.
    pub fn git_program(&self) -> String {
        self.effective()
            .git_program
            .unwrap_or_else(|| DEFAULT_GIT_PROGRAM.to_string())
    }

    /// Default `describe` format. Defaults to `%B`.
    pub fn describe_format(&self) -> String {
        self.effective()
            .describe_format
            .unwrap_or_else(|| DEFAULT_DESCRIBE_FORMAT.to_string())
    }

    /// Path the global file was loaded from.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Path the repo file was loaded from.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    #[test]
    fn defaults_without_files() {
        let repo = TempDir::new().unwrap();
        let config = Config::load_from(None, Some(repo.path())).unwrap();

        assert_eq!(config.git_program(), "git");
        assert_eq!(config.describe_format(), "%B");
        assert!(config.global_config_loaded_from().is_none());
        assert!(config.repo_config_loaded_from().is_none());
    }

    #[test]
    fn global_file_applies() {
        let temp = TempDir::new().unwrap();
        let global = temp.child("config.toml");
        global.write_str("git_program = \"/opt/git/bin/git\"\n").unwrap();

        let config = Config::load_from(Some(global.path()), None).unwrap();
        assert_eq!(config.git_program(), "/opt/git/bin/git");
        assert_eq!(config.global_config_loaded_from(), Some(global.path()));
    }

    #[test]
    fn repo_overrides_global() {
        let temp = TempDir::new().unwrap();
        let global = temp.child("global.toml");
        global
            .write_str("git_program = \"git-a\"\ndescribe_format = \"%s\"\n")
            .unwrap();
        let git_dir = temp.child("repo/.git");
        git_dir
            .child("gitcmd/config.toml")
            .write_str("git_program = \"git-b\"\n")
            .unwrap();

        let config = Config::load_from(Some(global.path()), Some(git_dir.path())).unwrap();
        assert_eq!(config.git_program(), "git-b");
        // Not set in the repo file, so the global value shows through.
        assert_eq!(config.describe_format(), "%s");
        assert_eq!(
            config.repo_config_loaded_from(),
            Some(Config::repo_config_path(git_dir.path()).as_path())
        );
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        temp.child("gitcmd/config.toml")
            .write_str("git_program = \"git\"\ntrunk = \"main\"\n")
            .unwrap();

        let err = Config::load_from(None, Some(temp.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }), "{err:?}");
    }

    #[test]
    fn empty_value_rejected() {
        let temp = TempDir::new().unwrap();
        let global = temp.child("config.toml");
        global.write_str("describe_format = \"\"\n").unwrap();

        let err = Config::load_from(Some(global.path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)), "{err:?}");
    }

    #[test]
    fn unreadable_global_is_read_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.child("missing.toml");

        let err = Config::load_from(Some(missing.path()), None).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }), "{err:?}");
    }
}
