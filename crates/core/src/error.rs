//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Construction either fully succeeds or fails with one of these; there is no
/// partially built document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The factory was given a type tag that names no known document kind.
    #[error("unrecognized document type: {0}")]
    UnrecognizedDocumentType(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn unrecognized_type(tag: impl Into<String>) -> Self {
        Self::UnrecognizedDocumentType(tag.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
