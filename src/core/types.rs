//! core::types
//!
//! Strong types for values that cross the git process boundary.
//!
//! # Types
//!
//! - [`BranchName`] - Branch name accepted by branch-creating operations
//! - [`Oid`] - Object id parsed from `rev-parse` / `merge-base` output
//!
//! # Validation
//!
//! Both types validate at construction. Output that git hands back is run
//! through the same constructors, so a malformed hash never escapes the
//! git layer as a plain string.
//!
//! # Examples
//!
//! ```
//! use gitcmd::core::types::{BranchName, Oid};
//!
//! let branch = BranchName::new("stack/part-2").unwrap();
//! let oid = Oid::new("abc123def4567890abc123def4567890abc12345").unwrap();
//! assert_eq!(branch.as_str(), "stack/part-2");
//! assert_eq!(oid.short(7), "abc123d");
//!
//! assert!(BranchName::new("two..dots").is_err());
//! assert!(Oid::new("HEAD").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid object id: {0}")]
    InvalidOid(String),
}

/// Characters git refuses anywhere in a refname.
const FORBIDDEN_CHARS: [char; 8] = [' ', '~', '^', ':', '\\', '?', '*', '['];

/// Substrings git refuses anywhere in a refname.
const FORBIDDEN_SEQUENCES: [&str; 3] = ["..", "@{", "//"];

/// A validated Git branch name.
///
/// Follows the subset of `git check-ref-format --branch` rules that can be
/// checked without consulting a repository:
/// - not empty and not exactly `@`
/// - no component starts with `.` or ends with `.lock`
/// - does not start with `-` or end with `/`
/// - no `..`, `@{`, `//`, control characters, or any of `` ~^:\?*[`` and space
///
/// # Example
///
/// ```
/// use gitcmd::core::types::BranchName;
///
/// let name = BranchName::new("feature/split-1").unwrap();
/// assert_eq!(name.to_string(), "feature/split-1");
///
/// assert!(BranchName::new("-f").is_err());
/// assert!(BranchName::new("wip.lock").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` describing the first rule the
    /// name breaks.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name).map_err(|reason| TypeError::InvalidBranchName(reason.into()))?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), String> {
        if name.is_empty() {
            return Err("branch name cannot be empty".into());
        }
        if name == "@" {
            return Err("branch name cannot be '@'".into());
        }
        // A leading dash would be parsed as an option by git.
        if name.starts_with('-') {
            return Err("branch name cannot start with '-'".into());
        }
        if name.ends_with('/') {
            return Err("branch name cannot end with '/'".into());
        }
        if let Some(seq) = FORBIDDEN_SEQUENCES.iter().find(|seq| name.contains(*seq)) {
            return Err(format!("branch name cannot contain '{seq}'"));
        }
        if let Some(c) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(format!("branch name cannot contain '{c}'"));
        }
        if name.chars().any(|c| c.is_ascii_control()) {
            return Err("branch name cannot contain control characters".into());
        }
        for component in name.split('/') {
            if component.starts_with('.') {
                return Err(format!("component '{component}' cannot start with '.'"));
            }
            if component.ends_with(".lock") {
                return Err(format!("component '{component}' cannot end with '.lock'"));
            }
        }
        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A full Git object id (SHA-1 or SHA-256), normalized to lowercase.
///
/// # Example
///
/// ```
/// use gitcmd::core::types::Oid;
///
/// let oid = Oid::new("ABC123DEF4567890ABC123DEF4567890ABC12345").unwrap();
/// assert_eq!(oid.as_str(), "abc123def4567890abc123def4567890abc12345");
/// assert_eq!(oid.short(4), "abc1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Oid(String);

impl Oid {
    const SHA1_HEX_LEN: usize = 40;
    const SHA256_HEX_LEN: usize = 64;

    /// Create a new validated object id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidOid` unless the input is 40 or 64 hex digits.
    pub fn new(oid: impl Into<String>) -> Result<Self, TypeError> {
        let oid = oid.into().to_ascii_lowercase();
        if oid.len() != Self::SHA1_HEX_LEN && oid.len() != Self::SHA256_HEX_LEN {
            return Err(TypeError::InvalidOid(format!(
                "expected {} or {} hex characters, got {:?}",
                Self::SHA1_HEX_LEN,
                Self::SHA256_HEX_LEN,
                oid
            )));
        }
        if !oid.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TypeError::InvalidOid(format!("not hexadecimal: {oid:?}")));
        }
        Ok(Self(oid))
    }

    /// Abbreviate to at most `len` characters.
    pub fn short(&self, len: usize) -> &str {
        &self.0[..len.min(self.0.len())]
    }

    /// Get the object id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Oid {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Oid> for String {
    fn from(oid: Oid) -> Self {
        oid.0
    }
}

impl AsRef<str> for Oid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Oid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod branch_name {
        use super::*;

        #[test]
        fn accepts_ordinary_names() {
            for name in ["main", "stack/part-1", "fix_42", "user@topic", "v1.2", "a/b/c"] {
                assert!(BranchName::new(name).is_ok(), "{name} should be valid");
            }
        }

        #[test]
        fn rejects_empty_and_reserved() {
            assert!(BranchName::new("").is_err());
            assert!(BranchName::new("@").is_err());
        }

        #[test]
        fn rejects_option_lookalike() {
            let err = BranchName::new("-D").unwrap_err();
            assert_eq!(
                err,
                TypeError::InvalidBranchName("branch name cannot start with '-'".into())
            );
        }

        #[test]
        fn rejects_dot_and_lock_components() {
            assert!(BranchName::new(".hidden").is_err());
            assert!(BranchName::new("stack/.hidden").is_err());
            assert!(BranchName::new("wip.lock").is_err());
            assert!(BranchName::new("stack/wip.lock/next").is_err());
        }

        #[test]
        fn rejects_forbidden_sequences() {
            assert!(BranchName::new("a..b").is_err());
            assert!(BranchName::new("a@{b").is_err());
            assert!(BranchName::new("a//b").is_err());
            assert!(BranchName::new("trailing/").is_err());
        }

        #[test]
        fn rejects_forbidden_chars() {
            for name in [
                "a b", "a~b", "a^b", "a:b", "a\\b", "a?b", "a*b", "a[b", "a\tb", "a\x7fb",
            ] {
                assert!(BranchName::new(name).is_err(), "{name:?} should be invalid");
            }
        }

        #[test]
        fn serde_uses_validation() {
            let parsed: Result<BranchName, _> = serde_json::from_str("\"ok/name\"");
            assert_eq!(parsed.unwrap().as_str(), "ok/name");

            let rejected: Result<BranchName, _> = serde_json::from_str("\"bad..name\"");
            assert!(rejected.is_err());
        }
    }

    mod oid {
        use super::*;

        #[test]
        fn accepts_sha1_and_sha256() {
            assert!(Oid::new("e69de29bb2d1d6434b8b29ae775ad8c2e48c5391").is_ok());
            assert!(Oid::new("a".repeat(64)).is_ok());
        }

        #[test]
        fn normalizes_case() {
            let oid = Oid::new("E69DE29BB2D1D6434B8B29AE775AD8C2E48C5391").unwrap();
            assert_eq!(oid.as_str(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
        }

        #[test]
        fn short_clamps_to_length() {
            let oid = Oid::new("e69de29bb2d1d6434b8b29ae775ad8c2e48c5391").unwrap();
            assert_eq!(oid.short(7), "e69de29");
            assert_eq!(oid.short(500), oid.as_str());
        }

        #[test]
        fn rejects_refs_and_abbreviations() {
            assert!(Oid::new("").is_err());
            assert!(Oid::new("HEAD").is_err());
            assert!(Oid::new("e69de29").is_err());
            assert!(Oid::new("g69de29bb2d1d6434b8b29ae775ad8c2e48c5391").is_err());
        }
    }
}
