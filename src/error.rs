//! # Error Handling
//!
//! Centralized error type for the `class-repo` library, built with
//! `thiserror`. The command layer wraps these in `anyhow` for user-facing
//! reporting, so every variant here carries enough context to stand on its
//! own in a terminal message.
//!
//! Per-student command failures are deliberately NOT errors: a non-zero git
//! exit is a normal outcome of a batch run and is reported through
//! [`crate::batch::BatchSummary`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for class-repo operations
#[derive(Error, Debug)]
pub enum Error {
    /// The roster file exists but could not be parsed into a classroom.
    ///
    /// Malformed YAML and missing required fields both land here; there is
    /// no partial recovery.
    #[error("Failed to parse {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// A child process could not be started at all, e.g. git is not
    /// installed or not on PATH.
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML serialization error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config_parse() {
        let error = Error::ConfigParse {
            path: PathBuf::from(".classroom.yaml"),
            message: "missing field `github`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains(".classroom.yaml"));
        assert!(display.contains("missing field `github`"));
    }

    #[test]
    fn test_error_display_spawn() {
        let error = Error::Spawn {
            command: "git clone https://example.com/repo".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let display = format!("{}", error);
        assert!(display.contains("git clone"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let error: Error = io_error.into();
        let display = format!("{}", error);
        assert!(display.contains("I/O error"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_error_from_yaml_error() {
        let yaml_error =
            serde_yaml::from_str::<serde_yaml::Value>("invalid: [unclosed").unwrap_err();
        let error: Error = yaml_error.into();
        let display = format!("{}", error);
        assert!(display.contains("YAML error"));
    }
}
