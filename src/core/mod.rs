//! core
//!
//! Domain types and configuration.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BranchName, Oid
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Values parsed from git output are validated before they leave the git layer
//! - Config schemas are strict: unknown keys are rejected

pub mod config;
pub mod types;
