//! Error types for ncqc.

use std::path::PathBuf;

/// Result type alias for ncqc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ncqc operations.
///
/// Only dataset and configuration loading produce errors. Everything that
/// happens during check evaluation - missing variables, values outside
/// bounds - is recorded in the [`Report`](crate::Report) instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred, if known.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// JSON error while parsing a dataset or configuration document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Variable values form a ragged (non-rectangular) nested array.
    #[error("Variable '{name}': ragged array at depth {depth}")]
    RaggedArray {
        /// The name of the offending variable.
        name: String,
        /// Nesting depth at which the shape mismatch was found.
        depth: usize,
    },

    /// Variable values contain something other than numbers, nulls,
    /// or nested arrays.
    #[error("Variable '{name}': values must be numbers or nested arrays")]
    InvalidValues {
        /// The name of the offending variable.
        name: String,
    },

    /// Flat value buffer does not fill the declared shape.
    #[error("Variable '{name}': {len} values do not fill shape {shape:?}")]
    ShapeMismatch {
        /// The name of the offending variable.
        name: String,
        /// Number of values supplied.
        len: usize,
        /// The declared shape.
        shape: Vec<usize>,
    },
}

impl Error {
    /// Create an I/O error with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create an I/O error without path context.
    pub fn io_no_path(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }

    /// Create a ragged array error.
    pub fn ragged_array(name: impl Into<String>, depth: usize) -> Self {
        Self::RaggedArray {
            name: name.into(),
            depth,
        }
    }

    /// Create an invalid values error.
    pub fn invalid_values(name: impl Into<String>) -> Self {
        Self::InvalidValues { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::io(io_err, "/path/to/file");
        assert!(err.to_string().contains("/path/to/file"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_io_error_without_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::io_no_path(io_err);
        assert!(err.to_string().contains("None"));
    }

    #[test]
    fn test_ragged_array() {
        let err = Error::ragged_array("wind_speed", 2);
        assert!(err.to_string().contains("wind_speed"));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn test_invalid_values() {
        let err = Error::invalid_values("temperature");
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn test_shape_mismatch() {
        let err = Error::ShapeMismatch {
            name: "var_2d".to_string(),
            len: 150,
            shape: vec![10, 20],
        };
        let msg = err.to_string();
        assert!(msg.contains("var_2d"));
        assert!(msg.contains("150"));
        assert!(msg.contains("[10, 20]"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
