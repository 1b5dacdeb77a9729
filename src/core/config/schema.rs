//! core::config::schema
//!
//! Configuration file schema.
//!
//! The same keys are accepted in the global file and the repo file; the
//! repo file wins.
//!
//! ```toml
//! git_program = "/opt/git/bin/git"
//! describe_format = "%s"
//! ```

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Contents of one config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// git executable, as a name on `PATH` or a path
    pub git_program: Option<String>,

    /// Default `--format` for `describe`
    pub describe_format: Option<String>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for empty or whitespace-only values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("git_program", &self.git_program),
            ("describe_format", &self.describe_format),
        ];
        for (key, value) in fields {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::InvalidValue(format!("{key} cannot be empty")));
            }
        }
        Ok(())
    }

    /// Overlay `other` on top of `self`, field by field.
    pub fn merged_with(&self, other: &ConfigFile) -> ConfigFile {
        ConfigFile {
            git_program: other.git_program.clone().or_else(|| self.git_program.clone()),
            describe_format: other
                .describe_format
                .clone()
                .or_else(|| self.describe_format.clone()),
        }
    }
}
