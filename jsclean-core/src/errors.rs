//! errors.rs - Custom error types for the jsclean-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `jsclean-core` library.
///
/// The three I/O-facing variants (`InputRead`, `InvalidUtf8`, `OutputWrite`)
/// are all fatal for a run; nothing is retried.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum JscleanError {
    #[error("Failed to read input file '{}': {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file '{}' is not valid UTF-8: {source}", .path.display())]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to write output file '{}': {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to compile strip pattern '{0}': {1}")]
    PatternCompilationError(String, regex::Error),

    #[error("Strip pattern length ({0}) exceeds maximum allowed ({1})")]
    PatternLengthExceeded(usize, usize),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_name_the_path() {
        let err = JscleanError::InputRead {
            path: PathBuf::from("missing.js"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Failed to read input file 'missing.js': gone");

        let err = JscleanError::OutputWrite {
            path: PathBuf::from("/nope/out.js"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write output file '/nope/out.js': denied");
    }
}
