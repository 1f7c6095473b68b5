//! Error types for quizbowl-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised when validating values at the core's boundary.
///
/// Text extraction itself never fails; these come from parsing caller input
/// such as default metadata or uploaded documents.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid subject: {value}")]
    InvalidSubject { value: String },

    #[error("invalid difficulty: {value}")]
    InvalidDifficulty { value: String },

    #[error("invalid year (expected four digits): {value}")]
    InvalidYear { value: String },

    #[error("unsupported file type: {file_type}")]
    UnsupportedFileType { file_type: String },

    #[error("could not read {file_type} document: {reason}")]
    UnreadableDocument { file_type: String, reason: String },
}
