//! Error types for SodaDB
//!
//! Provides a unified error type for all operations. Per-request variants
//! map onto an HTTP status in [`crate::http`]; startup variants are fatal.

use thiserror::Error;

/// Result type alias using SodaError
pub type Result<T> = std::result::Result<T, SodaError>;

/// Unified error type for SodaDB operations
#[derive(Debug, Error)]
pub enum SodaError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Request Errors
    // -------------------------------------------------------------------------
    /// The request body did not decode into a record
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// The id path segment is missing or is not an unsigned 64-bit integer
    #[error("invalid record id")]
    InvalidRecordId,

    #[error("record ID {0} doesn't exist")]
    RecordNotFound(u64),

    /// No route matches the method, path, host, scheme or content type
    #[error("route not found")]
    RouteNotFound,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network interface {name}: {reason}")]
    Interface { name: String, reason: String },
}
