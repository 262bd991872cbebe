//! Domain error types

use thiserror::Error;

/// Errors raised when constructing a domain value from invalid parts.
///
/// Construction failures are fatal and surface immediately; they are never
/// folded into the ordinary absences (`None`) the lookup chain propagates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A book was built without an ISBN.
    #[error("book must have a non-empty ISBN")]
    MissingIsbn,

    /// A book was built without a title.
    #[error("book must have a non-empty title")]
    MissingTitle,
}

/// Result type for domain construction.
pub type DomainResult<T> = Result<T, DomainError>;
