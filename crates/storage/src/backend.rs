//! Ledger state backend trait definition.
//!
//! This module defines the [`StateBackend`] trait, the capability handed to
//! the record layer by whatever ledger hosts it.
//!
//! # Design Philosophy
//!
//! The trait exposes only what the record layer needs:
//! - **Keys and values are bytes**: No assumptions about serialization format
//! - **Async by default**: The hosting ledger is usually reached over I/O
//! - **Ordered range scans**: Results always come back in ascending key order
//!
//! Record encoding, error classification and filtering live in the contract
//! built on top of this trait, not in the backends.
//!
//! # Implementing a Backend
//!
//! 1. Implement [`get`](StateBackend::get), [`set`](StateBackend::set) and
//!    [`get_range`](StateBackend::get_range)
//! 2. Map backend-specific errors to [`StorageError`](crate::StorageError)
//!
//! See [`MemoryBackend`](crate::MemoryBackend) for a reference implementation.

use std::ops::{Bound, RangeBounds};

use async_trait::async_trait;
use bytes::Bytes;

use crate::{error::StorageResult, types::KeyValue};

/// Abstract ledger state for key-value operations.
///
/// Backends are expected to be thread-safe (`Send + Sync`) and to give every
/// caller read-your-writes consistency.
///
/// # Key Operations
///
/// | Method | Description |
/// |--------|-------------|
/// | [`get`](StateBackend::get) | Retrieve a single value by key |
/// | [`set`](StateBackend::set) | Store a key-value pair, replacing any prior value |
/// | [`get_range`](StateBackend::get_range) | Retrieve all pairs in a key range |
/// | [`get_state_by_range`](StateBackend::get_state_by_range) | Range scan with string bounds |
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use hashfile_storage::{MemoryBackend, StateBackend};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let backend = MemoryBackend::new();
///
/// backend.set(b"key".to_vec(), b"value".to_vec()).await.unwrap();
/// let value = backend.get(b"key").await.unwrap();
/// assert_eq!(value, Some(Bytes::from("value")));
/// # });
/// ```
#[async_trait]
pub trait StateBackend: Send + Sync {
    /// Retrieves a value by key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(bytes))` if the key exists
    /// - `Ok(None)` if the key doesn't exist
    /// - `Err(...)` on storage errors
    #[must_use = "storage operations may fail and errors must be handled"]
    async fn get(&self, key: &[u8]) -> StorageResult<Option<Bytes>>;

    /// Stores a key-value pair.
    ///
    /// If the key already exists, its value is overwritten.
    #[must_use = "storage operations may fail and errors must be handled"]
    async fn set(&self, key: Vec<u8>, value: Vec<u8>) -> StorageResult<()>;

    /// Retrieves all key-value pairs within a range, in ascending key order.
    ///
    /// A range whose start lies after its end is empty, not an error.
    #[must_use = "storage operations may fail and errors must be handled"]
    async fn get_range<R>(&self, range: R) -> StorageResult<Vec<KeyValue>>
    where
        R: RangeBounds<Vec<u8>> + Send;

    /// Scans the half-open key interval `[start, end)`.
    ///
    /// An empty `start` or `end` leaves that side unbounded, so
    /// `get_state_by_range("", "")` returns the entire keyspace.
    #[must_use = "storage operations may fail and errors must be handled"]
    async fn get_state_by_range(&self, start: &str, end: &str) -> StorageResult<Vec<KeyValue>> {
        let start = if start.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start.as_bytes().to_vec())
        };
        let end =
            if end.is_empty() { Bound::Unbounded } else { Bound::Excluded(end.as_bytes().to_vec()) };

        self.get_range((start, end)).await
    }
}
