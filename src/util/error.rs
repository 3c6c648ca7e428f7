//! Error types for the scene library.

use thiserror::Error;

/// Main error type for scene construction and serialization.
#[derive(Error, Debug)]
pub enum Error {
    /// A required value is blank, out of range or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested representation is not implemented
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// An object references a geometry or material missing from the scene registries
    #[error("Object {object} references unknown {kind} {target}")]
    DanglingReference {
        object: String,
        kind: &'static str,
        target: String,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a not-supported error.
    pub fn not_supported(msg: impl Into<String>) -> Self {
        Self::NotSupported(msg.into())
    }
}

/// Result type alias for scene operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::invalid_argument("Red must be a number between 0 and 255");
        assert!(e.to_string().contains("Red"));

        let e = Error::DanglingReference {
            object: "obj-1".into(),
            kind: "geometry",
            target: "geo-9".into(),
        };
        assert!(e.to_string().contains("obj-1"));
        assert!(e.to_string().contains("geo-9"));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
