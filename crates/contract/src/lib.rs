//! File hash records on an ordered key-value ledger.
//!
//! This crate provides [`HashFileContract`], which creates, queries,
//! range-scans and updates JSON-encoded [`HashFile`] records stored under
//! caller-chosen keys, plus a scan filtered by owning user. Storage goes
//! through any [`StateBackend`](hashfile_storage::StateBackend); tests use
//! [`MemoryBackend`](hashfile_storage::MemoryBackend).
//!
//! # Operations
//!
//! | Method | Returns | Fails with |
//! |--------|---------|------------|
//! | [`create_hash_file`](HashFileContract::create_hash_file) | [`HashFile`] | `AlreadyExists` |
//! | [`query_file`](HashFileContract::query_file) | JSON object text | `FileNotFound` |
//! | [`query_all_hash_file`](HashFileContract::query_all_hash_file) | JSON array text | `MalformedRecord` |
//! | [`query_user`](HashFileContract::query_user) | JSON array text | `UserNotFound` |
//! | [`change_file_hash`](HashFileContract::change_file_hash) | [`HashFile`] | `FileNotFound` |
//! | [`init_ledger`](HashFileContract::init_ledger) | records written | storage errors |
//!
//! # Quick Start
//!
//! ```
//! use hashfile_contract::{HashFileContract, record};
//! use hashfile_storage::MemoryBackend;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let contract = HashFileContract::new(MemoryBackend::new());
//!
//!     contract.create_hash_file("k1", "a.txt", "alice", "deadbeef", "2024-01-01").await?;
//!     contract.create_hash_file("k2", "b.txt", "bob", "0badf00d", "2024-01-02").await?;
//!
//!     let text = contract.query_user("alice").await?;
//!     let results = record::decode_results(&text)?;
//!     assert_eq!(results.len(), 1);
//!     assert_eq!(results[0].key, "k1");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature Flags
//!
//! - **`testutil`**: Enables the `testutil` module with record fixtures, a seeded contract factory
//!   and `assert_*!` macros for integration tests.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod contract;
pub mod error;
pub mod record;
#[cfg(any(test, feature = "testutil"))]
#[allow(clippy::expect_used)]
pub mod testutil;

pub use config::{ContractConfig, FieldMapping};
pub use contract::HashFileContract;
pub use error::{ContractError, ContractResult, ErrorKind};
pub use record::{CodecError, HashFile, HashFileQueryResult};
