//! Error types for loading and parsing puzzle inputs, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (P001-P003) for documentation lookup:
//!
//! - P001: `InputUnreadable` (Puzzle input file could not be read)
//! - P002: `InvalidPair` (Location-list line is not a pair)
//! - P003: `InvalidInteger` (Numeric field is not an integer)
//!
//! The grid searches never fail: any sequence of lines is a valid grid. Errors only
//! come from the filesystem or from the integer-based puzzles.
//!
//! # Examples
//!
//! ```
//! use aoc24::errors::PuzzleError;
//!
//! let err = PuzzleError::InvalidPair { line_number: 3, line: "12".to_string() };
//! assert_eq!(err.code(), "P002");
//! println!("{}", err.display_detailed());
//! ```

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

/// Everything that can go wrong before a solver gets to run.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("failed to read puzzle input from '{}': {source}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("input line {line_number} does not contain a valid pair: \"{line}\"")]
    InvalidPair { line_number: usize, line: String },

    #[error("input line {line_number}: '{token}' is not an integer ({source})")]
    InvalidInteger {
        line_number: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::InputUnreadable { .. } => "P001",
            PuzzleError::InvalidPair { .. } => "P002",
            PuzzleError::InvalidInteger { .. } => "P003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::InputUnreadable { .. } => "Puzzle input file could not be read",
            PuzzleError::InvalidPair { .. } => "Location-list line is not a pair",
            PuzzleError::InvalidInteger { .. } => "Numeric field is not an integer",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::InputUnreadable { .. } => "The input file does not exist, is not readable, or is not valid UTF-8. Nothing is printed on stdout when this happens.",
            PuzzleError::InvalidPair { .. } => "Every non-blank line of a location list must hold exactly two whitespace-separated location IDs, one per list.",
            PuzzleError::InvalidInteger { .. } => "Location IDs and report levels are signed integers. Any other token (letters, decimals, stray punctuation) is rejected with its line number.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::InputUnreadable { .. } => Some("Check the path, or pass another file with --input <PATH>"),
            PuzzleError::InvalidPair { .. } => Some("Expected format: '<left> <right>' (e.g., '3   4')"),
            PuzzleError::InvalidInteger { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(
    base_msg: &str,
    code: &str,
    help: Option<&str>,
) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
