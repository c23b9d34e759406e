//! Range scan edge case tests for `MemoryBackend`.
//!
//! Covers empty-string bounds, degenerate ranges, boundary inclusion and
//! byte-wise ordering of non-ASCII keys.

#![allow(clippy::expect_used)]

use hashfile_storage::{StateBackend, testutil::backend_with};

fn keys(results: &[hashfile_storage::KeyValue]) -> Vec<String> {
    results.iter().map(|kv| kv.key_str().expect("utf-8 key").to_owned()).collect()
}

#[tokio::test]
async fn test_full_scan_on_empty_backend() {
    let backend = backend_with(Vec::<(&str, &str)>::new()).await;

    let results = backend.get_state_by_range("", "").await.expect("scan should succeed");
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_scan_ignores_insertion_order() {
    let backend = backend_with([("k2", "b"), ("k1", "a"), ("k3", "c")]).await;

    let results = backend.get_state_by_range("", "").await.expect("scan should succeed");
    assert_eq!(keys(&results), ["k1", "k2", "k3"]);
    assert_eq!(&results[0].value[..], b"a");
}

#[tokio::test]
async fn test_start_equals_end_is_empty() {
    let backend = backend_with([("a", "1"), ("b", "2")]).await;

    let results = backend.get_state_by_range("b", "b").await.expect("scan should succeed");
    assert!(results.is_empty(), "[b, b) holds nothing, got {results:?}");
}

#[tokio::test]
async fn test_start_after_end_is_empty() {
    let backend = backend_with([("a", "1"), ("b", "2")]).await;

    let results = backend.get_state_by_range("z", "a").await.expect("scan should succeed");
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_start_is_inclusive_end_is_exclusive() {
    let backend = backend_with([("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]).await;

    let results = backend.get_state_by_range("b", "d").await.expect("scan should succeed");
    assert_eq!(keys(&results), ["b", "c"]);
}

#[tokio::test]
async fn test_non_ascii_keys_sort_bytewise() {
    let backend = backend_with([("é", "1"), ("z", "2"), ("a", "3")]).await;

    let results = backend.get_state_by_range("", "").await.expect("scan should succeed");
    // 'é' encodes as 0xC3 0xA9, which sorts after every ASCII byte.
    assert_eq!(keys(&results), ["a", "z", "é"]);
}
