//! Error types for query compilation
//!
//! Every expression builder fails fast with the specific violated contract;
//! a failed compilation never degrades to a partial query string, so a
//! malformed query is never handed to the transport layer.

use thiserror::Error;

/// Result type alias for query compilation
pub type QueryResult<T> = Result<T, QueryError>;

/// Error types for query-expression building
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A filter operand referenced a condition identifier absent from the catalog
    #[error("unknown filter condition '{0}'")]
    UnknownCondition(String),

    /// Pagination window with a negative start index or chunk size
    #[error("invalid page window: {0}")]
    InvalidPageWindow(String),
}
