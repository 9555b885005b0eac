//! Error types for dxf-sketch

use std::io;
use thiserror::Error;

/// Main error type for DXF reading and writing
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while reading or writing the stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended in the middle of a code/value pair, or the code line
    /// was not an integer
    #[error("Malformed group code pair at line {line}: {reason}")]
    MalformedPair { line: usize, reason: String },

    /// Structural violation of the DXF layout
    #[error("Parse error: {0}")]
    Parse(String),

    /// A code 0 pair inside ENTITIES named an entity this crate does not read
    #[error("Unknown entity type: {0}")]
    UnknownEntityType(String),

    /// A text line could not be decoded
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// An element has no DXF template
    #[error("Cannot unparse: {0}")]
    Unparse(String),

    /// Unit conversion rejected a value
    #[error("Unit conversion error: {0}")]
    Units(String),
}

impl DxfError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        DxfError::Parse(message.into())
    }
}

/// Result type alias for dxf-sketch operations
pub type Result<T> = std::result::Result<T, DxfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DxfError::UnknownEntityType("HATCH".to_string());
        assert_eq!(err.to_string(), "Unknown entity type: HATCH");
    }

    #[test]
    fn test_malformed_pair_display() {
        let err = DxfError::MalformedPair {
            line: 7,
            reason: "missing value line".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("missing value line"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let dxf_err: DxfError = io_err.into();
        assert!(matches!(dxf_err, DxfError::Io(_)));
    }
}
