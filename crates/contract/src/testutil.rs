//! Shared test utilities for contract testing.
//!
//! Enable the `testutil` feature in `[dev-dependencies]`:
//!
//! ```toml
//! [dev-dependencies]
//! hashfile-contract = { path = "../contract", features = ["testutil"] }
//! ```

use hashfile_storage::MemoryBackend;

use crate::{HashFile, HashFileContract};

/// Build a record with the given owner and derived filename, hash and date.
///
/// `idx` keeps the derived values distinct between records.
#[must_use]
pub fn make_file(username: &str, idx: usize) -> HashFile {
    HashFile::builder()
        .filename(format!("file-{idx:04}.txt"))
        .username(username)
        .filehash(format!("{idx:064x}"))
        .filedate(format!("2024-01-{:02}", idx % 28 + 1))
        .build()
}

/// Create a contract over a fresh [`MemoryBackend`] holding one record per
/// `(key, username)` pair, created in the given order.
///
/// # Panics
///
/// Panics if any create fails, e.g. on a duplicate key.
pub async fn seeded_contract(entries: &[(&str, &str)]) -> HashFileContract<MemoryBackend> {
    let contract = HashFileContract::new(MemoryBackend::new());
    for (idx, (key, username)) in entries.iter().enumerate() {
        let file = make_file(username, idx);
        contract
            .create_hash_file(key, file.filename(), file.username(), file.filehash(), file.filedate())
            .await
            .expect("seed create failed");
    }
    contract
}

/// Assert that a [`ContractResult`](crate::ContractResult) failed with
/// [`ErrorKind::NotFound`](crate::ErrorKind::NotFound) about `subject`.
#[macro_export]
macro_rules! assert_not_found {
    ($result:expr, $subject:expr) => {
        match &$result {
            Err(e) => {
                assert_eq!(e.kind(), $crate::ErrorKind::NotFound, "expected NotFound, got: {e:?}");
                assert_eq!(e.subject(), Some($subject), "NotFound about the wrong subject");
            },
            Ok(v) => panic!("expected NotFound, got Ok({v:?})"),
        }
    };
}

/// Assert that a [`ContractResult`](crate::ContractResult) failed with
/// [`ErrorKind::AlreadyExists`](crate::ErrorKind::AlreadyExists) for `key`.
#[macro_export]
macro_rules! assert_already_exists {
    ($result:expr, $key:expr) => {
        match &$result {
            Err(e) => {
                assert_eq!(
                    e.kind(),
                    $crate::ErrorKind::AlreadyExists,
                    "expected AlreadyExists, got: {e:?}"
                );
                assert_eq!(e.subject(), Some($key), "AlreadyExists for the wrong key");
            },
            Ok(v) => panic!("expected AlreadyExists, got Ok({v:?})"),
        }
    };
}

/// Assert that a [`ContractResult`](crate::ContractResult) failed with
/// [`ErrorKind::MalformedRecord`](crate::ErrorKind::MalformedRecord) at `key`.
#[macro_export]
macro_rules! assert_malformed {
    ($result:expr, $key:expr) => {
        match &$result {
            Err(e) => {
                assert_eq!(
                    e.kind(),
                    $crate::ErrorKind::MalformedRecord,
                    "expected MalformedRecord, got: {e:?}"
                );
                assert_eq!(e.subject(), Some($key), "MalformedRecord at the wrong key");
            },
            Ok(v) => panic!("expected MalformedRecord, got Ok({v:?})"),
        }
    };
}
