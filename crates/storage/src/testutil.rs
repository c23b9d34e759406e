//! Shared test utilities for ledger state testing.
//!
//! Feature-gated behind `testutil` so it never leaks into production builds.
//!
//! ```toml
//! [dev-dependencies]
//! hashfile-storage = { path = "../storage", features = ["testutil"] }
//! ```

use crate::{StateBackend, memory::MemoryBackend};

/// Create a [`MemoryBackend`] holding the given `(key, value)` pairs.
///
/// # Panics
///
/// Panics if any `set` fails (should not happen with `MemoryBackend`).
pub async fn backend_with<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> MemoryBackend
where
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    let backend = MemoryBackend::new();
    for (key, value) in entries {
        backend
            .set(key.as_ref().to_vec(), value.as_ref().to_vec())
            .await
            .expect("populate set failed");
    }
    backend
}
