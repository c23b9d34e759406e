//! Ledger state abstraction for HashFile records.
//!
//! This crate provides the [`StateBackend`] trait, the minimal capability the
//! record layer needs from the ledger that hosts it: point reads, point writes,
//! and ordered range scans. The ledger engine itself lives outside this
//! workspace; [`MemoryBackend`] stands in for it in tests and development.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Contract Layer                           │
//! │   HashFileContract (create, query, scan, filter, update)    │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   hashfile-storage                          │
//! │              StateBackend trait                             │
//! │        (get, set, get_range, get_state_by_range)            │
//! ├──────────────┬──────────────────────────────────────────────┤
//! │ MemoryBackend│          hosting ledger                      │
//! │   (testing)  │          (external)                          │
//! └──────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use hashfile_storage::{MemoryBackend, StateBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = MemoryBackend::new();
//!
//!     backend.set(b"k1".to_vec(), br#"{"filename":"a.txt"}"#.to_vec()).await?;
//!
//!     let value = backend.get(b"k1").await?;
//!     assert!(value.is_some());
//!
//!     // Empty bounds scan the whole keyspace.
//!     let all = backend.get_state_by_range("", "").await?;
//!     assert_eq!(all.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error Handling
//!
//! All operations return [`StorageResult<T>`]. Backends map their internal
//! failures to [`StorageError`] variants.
//!
//! # Feature Flags
//!
//! - **`testutil`**: Enables the `testutil` module with a pre-populated backend factory for
//!   integration tests.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod error;
pub mod memory;
pub mod size_limits;
#[cfg(any(test, feature = "testutil"))]
#[allow(clippy::expect_used)]
pub mod testutil;
pub mod types;

pub use backend::StateBackend;
pub use error::{BoxError, ConfigError, StorageError, StorageResult};
pub use memory::MemoryBackend;
pub use size_limits::{DEFAULT_MAX_KEY_SIZE, DEFAULT_MAX_VALUE_SIZE, SizeLimits};
pub use types::KeyValue;
