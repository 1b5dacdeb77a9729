//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Results go to stdout; errors and warnings go to stderr. Quiet mode
//! suppresses everything except results and errors. With `--json`, results
//! are printed as JSON values instead of plain text.

use std::fmt::Display;

use serde::Serialize;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - results and errors only
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. `quiet` wins over `debug`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Default `tracing` filter directive for this level.
    ///
    /// Failed git commands are logged at `warn` and also returned as errors,
    /// so they only show up in the log when debugging.
    pub fn log_filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "off",
            Verbosity::Normal => "error",
            Verbosity::Debug => "debug",
        }
    }
}

/// How query results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    pub verbosity: Verbosity,
    pub json: bool,
}

impl Printer {
    /// Print a query result. Always shown.
    pub fn value<T: Serialize + Display>(&self, value: &T) -> serde_json::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(value)?);
        } else {
            println!("{}", value);
        }
        Ok(())
    }

    /// Print a result that may be absent: JSON `null`, or an empty line.
    pub fn optional<T: Serialize + Display>(&self, value: Option<&T>) -> serde_json::Result<()> {
        match value {
            Some(value) => self.value(value),
            None if self.json => {
                println!("null");
                Ok(())
            }
            None => {
                println!();
                Ok(())
            }
        }
    }

    /// Print a confirmation for a mutating command (respects quiet mode).
    pub fn success(&self, message: impl Display) {
        if self.json {
            return;
        }
        if self.verbosity != Verbosity::Quiet {
            println!("{}", message);
        }
    }

    /// Print a warning (respects quiet mode).
    pub fn warn(&self, message: impl Display) {
        if self.verbosity != Verbosity::Quiet {
            eprintln!("warning: {}", message);
        }
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}
