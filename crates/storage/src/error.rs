//! Storage error types and result alias.
//!
//! All ledger backends map their internal failures to [`StorageError`].
//!
//! # Error Types
//!
//! - [`StorageError::Serialization`] - Data encoding/decoding failures
//! - [`StorageError::Internal`] - Backend-specific internal errors
//! - [`StorageError::SizeLimitExceeded`] - Key or value over the configured limit
//!
//! # Example
//!
//! ```
//! use hashfile_storage::{StorageError, StorageResult};
//!
//! fn check_key(key: &[u8]) -> StorageResult<&str> {
//!     std::str::from_utf8(key).map_err(|e| StorageError::serialization_with_source("ledger key", e))
//! }
//! ```

use std::sync::Arc;

use thiserror::Error;

/// A boxed error type for source chain tracking.
pub type BoxError = Arc<dyn std::error::Error + Send + Sync>;

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during ledger state operations.
///
/// Errors preserve their source chain via `#[source]`, so diagnostic tooling
/// can print the full context.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// Data could not be encoded for storage or decoded on retrieval.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization error.
        message: String,
        /// The underlying error that caused serialization to fail.
        #[source]
        source: Option<BoxError>,
    },

    /// Backend-specific failure that fits no other category.
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
        /// The underlying error that caused this internal failure.
        #[source]
        source: Option<BoxError>,
    },

    /// A key or value exceeded the configured size limit.
    #[error("{kind} size {actual} exceeds limit of {limit} bytes")]
    SizeLimitExceeded {
        /// Which part of the entry was too large (`"key"` or `"value"`).
        kind: &'static str,
        /// The actual size in bytes.
        actual: usize,
        /// The configured maximum in bytes.
        limit: usize,
    },
}

impl StorageError {
    /// Creates a new `Serialization` error with the given message.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization { message: message.into(), source: None }
    }

    /// Creates a new `Serialization` error with a message and source error.
    #[must_use]
    pub fn serialization_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Serialization { message: message.into(), source: Some(Arc::new(source)) }
    }

    /// Creates a new `Internal` error with the given message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into(), source: None }
    }

    /// Creates a new `Internal` error with a message and source error.
    #[must_use]
    pub fn internal_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Internal { message: message.into(), source: Some(Arc::new(source)) }
    }

    /// Creates a new `SizeLimitExceeded` error.
    #[must_use]
    pub fn size_limit_exceeded(kind: &'static str, actual: usize, limit: usize) -> Self {
        Self::SizeLimitExceeded { kind, actual, limit }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A numeric setting is below its allowed minimum.
    #[error("{field} must be at least {min}, got {value}")]
    BelowMinimum {
        /// Name of the offending field.
        field: &'static str,
        /// The minimum allowed value.
        min: String,
        /// The value that was supplied.
        value: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_serialization_without_source() {
        let err = StorageError::serialization("ledger key is not valid UTF-8");
        assert_eq!(err.to_string(), "Serialization error: ledger key is not valid UTF-8");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_source_chain_preserved() {
        let io = std::io::Error::other("disk on fire");
        let err = StorageError::internal_with_source("write failed", io);

        let source = err.source().expect("source should be preserved");
        assert_eq!(source.to_string(), "disk on fire");
    }

    #[test]
    fn test_size_limit_display() {
        let err = StorageError::size_limit_exceeded("key", 600, 512);
        assert_eq!(err.to_string(), "key size 600 exceeds limit of 512 bytes");
    }

    #[test]
    fn test_config_error_names_field() {
        let err = ConfigError::BelowMinimum {
            field: "max_key_size",
            min: "1".into(),
            value: "0".into(),
        };
        assert_eq!(err.to_string(), "max_key_size must be at least 1, got 0");
    }
}
