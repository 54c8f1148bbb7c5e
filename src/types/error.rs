//! Error types for the cinema data processor
//!
//! This module defines the errors that abort a whole import or export call.
//! Per-record problems (constraint violations, unknown genres, dangling
//! references, duplicate titles) are not errors at this level: they are
//! recovered inside the pipeline and surface only as report lines.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Document Errors**: Malformed JSON or XML input, serialization failures
//! - **Persistence Errors**: The staged batch could not be committed
//! - **Runtime Errors**: The async runtime could not be started

use thiserror::Error;

/// Main error type for the cinema data processor
///
/// Every variant is fatal for the call that produced it: no partial report
/// is returned and nothing staged by that call is persisted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CinemaError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The input JSON document could not be parsed
    #[error("JSON parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    JsonParse {
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Description of the parsing error
        message: String,
    },

    /// The input XML document could not be parsed
    #[error("XML parse error: {message}")]
    XmlParse {
        /// Description of the parsing error
        message: String,
    },

    /// An export document could not be written
    #[error("Failed to write {format} document: {message}")]
    DocumentWrite {
        /// Output format ("JSON" or "XML")
        format: String,
        /// Description of the serialization error
        message: String,
    },

    /// The staged batch violated referential integrity and was discarded
    #[error("Commit failed: {entity} references missing {target} {id}")]
    CommitFailed {
        /// Kind of the staged entity holding the dangling reference
        entity: String,
        /// Kind of the referenced entity
        target: String,
        /// Identifier that did not resolve
        id: u32,
    },

    /// The async runtime could not be created
    #[error("Runtime error: {message}")]
    Runtime {
        /// Description of the runtime failure
        message: String,
    },
}

impl From<std::io::Error> for CinemaError {
    fn from(error: std::io::Error) -> Self {
        CinemaError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for CinemaError {
    fn from(error: serde_json::Error) -> Self {
        let line = match error.line() {
            0 => None,
            line => Some(line),
        };

        CinemaError::JsonParse {
            line,
            message: error.to_string(),
        }
    }
}

impl From<quick_xml::DeError> for CinemaError {
    fn from(error: quick_xml::DeError) -> Self {
        CinemaError::XmlParse {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl CinemaError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        CinemaError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a DocumentWrite error
    pub fn document_write(format: &str, message: impl ToString) -> Self {
        CinemaError::DocumentWrite {
            format: format.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a CommitFailed error
    pub fn commit_failed(entity: &str, target: &str, id: u32) -> Self {
        CinemaError::CommitFailed {
            entity: entity.to_string(),
            target: target.to_string(),
            id,
        }
    }

    /// Create a Runtime error
    pub fn runtime(message: impl ToString) -> Self {
        CinemaError::Runtime {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        CinemaError::FileNotFound { path: "movies.json".to_string() },
        "File not found: movies.json"
    )]
    #[case::io_error(
        CinemaError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::json_parse_with_line(
        CinemaError::JsonParse { line: Some(3), message: "expected value".to_string() },
        "JSON parse error at line 3: expected value"
    )]
    #[case::json_parse_without_line(
        CinemaError::JsonParse { line: None, message: "expected value".to_string() },
        "JSON parse error: expected value"
    )]
    #[case::xml_parse(
        CinemaError::XmlParse { message: "unexpected end".to_string() },
        "XML parse error: unexpected end"
    )]
    #[case::commit_failed(
        CinemaError::CommitFailed { entity: "Ticket".to_string(), target: "Projection".to_string(), id: 42 },
        "Commit failed: Ticket references missing Projection 42"
    )]
    fn test_error_display(#[case] error: CinemaError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::file_not_found(
        CinemaError::file_not_found("halls.json"),
        CinemaError::FileNotFound { path: "halls.json".to_string() }
    )]
    #[case::commit_failed(
        CinemaError::commit_failed("Projection", "Movie", 7),
        CinemaError::CommitFailed { entity: "Projection".to_string(), target: "Movie".to_string(), id: 7 }
    )]
    #[case::document_write(
        CinemaError::document_write("XML", "closed writer"),
        CinemaError::DocumentWrite { format: "XML".to_string(), message: "closed writer".to_string() }
    )]
    fn test_helper_functions(#[case] result: CinemaError, #[case] expected: CinemaError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: CinemaError = io_error.into();
        assert!(matches!(error, CinemaError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_json_error_conversion_keeps_line() {
        let json_error = serde_json::from_str::<Vec<u32>>("[1,\n2,\nx]").unwrap_err();
        let error: CinemaError = json_error.into();
        assert!(matches!(error, CinemaError::JsonParse { line: Some(3), .. }));
    }
}
