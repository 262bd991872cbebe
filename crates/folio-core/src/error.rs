//! Error types for catalog loading and lookup

use folio_domain::DomainError;
use thiserror::Error;

/// Errors from loading a catalog into a directory.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON.
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A book record violated a construction invariant.
    #[error("invalid book record: {0}")]
    InvalidBook(#[from] DomainError),

    /// A printing record named a type the domain does not know.
    #[error("unknown printing type: {0}")]
    UnknownPrintingType(String),

    /// A printing record carried an unparseable print date.
    #[error("unparseable print date: {0}")]
    BadPrintDate(#[from] chrono::ParseError),
}

/// Errors from the lookup itself.
///
/// Ordinary "not found" outcomes are not errors; they come back from the
/// lookup as `Ok(None)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The request carried no author name to search for.
    #[error("author name must not be empty")]
    EmptyAuthorName,
}

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;
