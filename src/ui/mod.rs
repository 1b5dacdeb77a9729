//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! All terminal output from the CLI goes through this module so quiet,
//! debug and JSON modes behave the same for every command.

pub mod output;
