//! Contract error types and result alias.
//!
//! Every failure surfaced by [`HashFileContract`](crate::HashFileContract) is a
//! [`ContractError`]. Each variant belongs to one [`ErrorKind`] and carries a
//! stable machine code alongside its human-readable message, so a hosting
//! ledger can hand both back to the client.
//!
//! | Variant | Kind | Code |
//! |---------|------|------|
//! | [`FileNotFound`](ContractError::FileNotFound) | `NotFound` | `FILE_NOT_FOUND` |
//! | [`UserNotFound`](ContractError::UserNotFound) | `NotFound` | `FILE_NOT_FOUND` |
//! | [`AlreadyExists`](ContractError::AlreadyExists) | `AlreadyExists` | `FILE_ALREADY_EXISTS` |
//! | [`MalformedRecord`](ContractError::MalformedRecord) | `MalformedRecord` | `MALFORMED_RECORD` |
//! | [`InvalidKey`](ContractError::InvalidKey) | `InvalidKey` | `INVALID_KEY` |
//! | [`Storage`](ContractError::Storage) | `Storage` | `STORAGE_ERROR` |

use std::fmt;

use hashfile_storage::StorageError;
use thiserror::Error;

use crate::record::CodecError;

/// Result type alias for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;

/// Coarse classification of a [`ContractError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No record matched the key or user.
    NotFound,
    /// A record already exists under the key.
    AlreadyExists,
    /// A stored value could not be decoded.
    MalformedRecord,
    /// The supplied key is not usable as a ledger key.
    InvalidKey,
    /// The ledger itself failed.
    Storage,
}

impl ErrorKind {
    /// Machine-readable code for this kind.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "FILE_NOT_FOUND",
            Self::AlreadyExists => "FILE_ALREADY_EXISTS",
            Self::MalformedRecord => "MALFORMED_RECORD",
            Self::InvalidKey => "INVALID_KEY",
            Self::Storage => "STORAGE_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Errors returned by contract operations.
///
/// # Non-exhaustive
///
/// New variants may be added in minor releases; match with a wildcard arm or
/// dispatch on [`kind`](ContractError::kind).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContractError {
    /// No record is stored under the key.
    #[error("File {key} does not exist")]
    FileNotFound {
        /// The key that was looked up.
        key: String,
    },

    /// A user scan found no records for the user.
    #[error("No files registered for user {username}")]
    UserNotFound {
        /// The user that was searched for.
        username: String,
    },

    /// A create targeted a key that already holds a record.
    #[error("FileHash {key} already exists")]
    AlreadyExists {
        /// The occupied key.
        key: String,
    },

    /// A stored value is not a valid record.
    ///
    /// During a scan this fails the whole operation; the remaining entries
    /// are not returned.
    #[error("Malformed record at key {key}")]
    MalformedRecord {
        /// Key holding the bad value.
        key: String,
        /// The decode failure.
        #[source]
        source: CodecError,
    },

    /// The key is empty.
    #[error("Ledger key must not be empty")]
    InvalidKey,

    /// The underlying ledger failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ContractError {
    /// Creates a `FileNotFound` error.
    #[must_use]
    pub fn file_not_found(key: impl Into<String>) -> Self {
        Self::FileNotFound { key: key.into() }
    }

    /// Creates a `UserNotFound` error.
    #[must_use]
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Self::UserNotFound { username: username.into() }
    }

    /// Creates an `AlreadyExists` error.
    #[must_use]
    pub fn already_exists(key: impl Into<String>) -> Self {
        Self::AlreadyExists { key: key.into() }
    }

    /// Creates a `MalformedRecord` error for the value stored at `key`.
    #[must_use]
    pub fn malformed(key: impl Into<String>, source: CodecError) -> Self {
        Self::MalformedRecord { key: key.into(), source }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } | Self::UserNotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::MalformedRecord { .. } => ErrorKind::MalformedRecord,
            Self::InvalidKey => ErrorKind::InvalidKey,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }

    /// Machine-readable code, e.g. `FILE_NOT_FOUND`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// The key or username this error is about, if any.
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::FileNotFound { key }
            | Self::AlreadyExists { key }
            | Self::MalformedRecord { key, .. } => Some(key),
            Self::UserNotFound { username } => Some(username),
            Self::InvalidKey | Self::Storage(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::error::Error as _;

    use rstest::rstest;

    use super::*;
    use crate::record::decode;

    #[rstest]
    #[case::file(ContractError::file_not_found("k1"), ErrorKind::NotFound, "FILE_NOT_FOUND")]
    #[case::user(ContractError::user_not_found("carol"), ErrorKind::NotFound, "FILE_NOT_FOUND")]
    #[case::exists(ContractError::already_exists("k1"), ErrorKind::AlreadyExists, "FILE_ALREADY_EXISTS")]
    #[case::key(ContractError::InvalidKey, ErrorKind::InvalidKey, "INVALID_KEY")]
    #[case::storage(
        ContractError::from(StorageError::internal("down")),
        ErrorKind::Storage,
        "STORAGE_ERROR"
    )]
    fn test_kind_and_code(
        #[case] err: ContractError,
        #[case] kind: ErrorKind,
        #[case] code: &str,
    ) {
        assert_eq!(err.kind(), kind);
        assert_eq!(err.code(), code);
        assert_eq!(kind.to_string(), code);
    }

    #[test]
    fn test_messages_name_the_subject() {
        assert_eq!(ContractError::file_not_found("nope").to_string(), "File nope does not exist");
        assert_eq!(ContractError::already_exists("k1").to_string(), "FileHash k1 already exists");
        assert_eq!(
            ContractError::user_not_found("carol").to_string(),
            "No files registered for user carol"
        );
        assert_eq!(ContractError::user_not_found("carol").subject(), Some("carol"));
    }

    #[test]
    fn test_malformed_keeps_decode_source() {
        let codec = decode(b"not json").unwrap_err();
        let err = ContractError::malformed("k9", codec);

        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
        assert_eq!(err.subject(), Some("k9"));
        assert!(err.source().is_some());
    }
}
