//! Common types used across storage operations.

use bytes::Bytes;

/// Key-value pair returned from range scans.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use hashfile_storage::KeyValue;
///
/// let kv = KeyValue::new(Bytes::from("k1"), Bytes::from(r#"{"filename":"a.txt"}"#));
/// assert_eq!(kv.key_str(), Some("k1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// The key identifying this entry.
    pub key: Bytes,

    /// The value stored at this key.
    pub value: Bytes,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: Bytes, value: Bytes) -> Self {
        Self { key, value }
    }

    /// Returns the key as UTF-8, or `None` if it is not valid UTF-8.
    #[must_use]
    pub fn key_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.key).ok()
    }
}
