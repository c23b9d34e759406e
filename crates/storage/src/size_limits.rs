//! Entry size limits applied before a record is written.
//!
//! Only writes are checked. A record that was stored under older, looser
//! limits stays readable; it just cannot be rewritten until it fits.
//!
//! | Limit | Default |
//! |-------|---------|
//! | key | 512 bytes |
//! | value | 524 288 bytes (512 KiB) |

use crate::{ConfigError, StorageError, StorageResult};

/// Default maximum key size in bytes (512 B).
pub const DEFAULT_MAX_KEY_SIZE: usize = 512;

/// Default maximum value size in bytes (512 KiB).
pub const DEFAULT_MAX_VALUE_SIZE: usize = 512 * 1024;

/// Upper bounds on the byte length of a ledger entry.
///
/// ```
/// use hashfile_storage::SizeLimits;
///
/// let limits = SizeLimits::new(8, 64).unwrap();
/// assert!(limits.check_entry(b"k1", br#"{"filename":"a.txt"}"#).is_ok());
/// assert!(limits.check_entry(b"much-too-long-key", b"{}").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    max_key_size: usize,
    max_value_size: usize,
}

impl SizeLimits {
    /// Builds limits from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BelowMinimum`] naming the first bound that is zero.
    pub fn new(max_key_size: usize, max_value_size: usize) -> Result<Self, ConfigError> {
        require_nonzero("max_key_size", max_key_size)?;
        require_nonzero("max_value_size", max_value_size)?;
        Ok(Self { max_key_size, max_value_size })
    }

    /// Largest accepted key, in bytes.
    #[must_use]
    pub fn max_key_size(&self) -> usize {
        self.max_key_size
    }

    /// Largest accepted encoded record, in bytes.
    #[must_use]
    pub fn max_value_size(&self) -> usize {
        self.max_value_size
    }

    /// Checks an entry about to be written. The key is checked first.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::SizeLimitExceeded`] for the first part over
    /// its bound. Lengths equal to the bound are accepted.
    pub fn check_entry(&self, key: &[u8], value: &[u8]) -> StorageResult<()> {
        within("key", key.len(), self.max_key_size)?;
        within("value", value.len(), self.max_value_size)
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self { max_key_size: DEFAULT_MAX_KEY_SIZE, max_value_size: DEFAULT_MAX_VALUE_SIZE }
    }
}

fn require_nonzero(field: &'static str, value: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::BelowMinimum { field, min: "1".into(), value: "0".into() });
    }
    Ok(())
}

fn within(kind: &'static str, actual: usize, limit: usize) -> StorageResult<()> {
    if actual > limit {
        return Err(StorageError::size_limit_exceeded(kind, actual, limit));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_match_ledger_policy() {
        let limits = SizeLimits::default();
        assert_eq!(limits.max_key_size(), 512);
        assert_eq!(limits.max_value_size(), 512 * 1024);
    }

    #[rstest]
    #[case::key(0, 1024, "max_key_size")]
    #[case::value(16, 0, "max_value_size")]
    #[case::both(0, 0, "max_key_size")]
    fn zero_bound_rejected(#[case] key: usize, #[case] value: usize, #[case] field: &str) {
        let err = SizeLimits::new(key, value).unwrap_err();
        assert!(
            matches!(&err, ConfigError::BelowMinimum { field: f, .. } if *f == field),
            "unexpected error: {err}"
        );
    }

    #[rstest]
    #[case::both_at_bound(4, 8, true)]
    #[case::key_one_over(5, 8, false)]
    #[case::value_one_over(4, 9, false)]
    #[case::empty_entry(0, 0, true)]
    fn check_entry_bounds(#[case] key_len: usize, #[case] value_len: usize, #[case] ok: bool) {
        let limits = SizeLimits::new(4, 8).unwrap();
        let result = limits.check_entry(&vec![b'k'; key_len], &vec![b'v'; value_len]);
        assert_eq!(result.is_ok(), ok, "key {key_len} / value {value_len}: {result:?}");
    }

    #[test]
    fn key_reported_before_value() {
        let limits = SizeLimits::new(4, 8).unwrap();
        let err = limits.check_entry(&[0u8; 10], &[0u8; 20]).unwrap_err();
        assert!(matches!(
            err,
            StorageError::SizeLimitExceeded { kind: "key", actual: 10, limit: 4 }
        ));
    }

    #[test]
    fn oversized_value_reports_lengths() {
        let limits = SizeLimits::new(4, 8).unwrap();
        let err = limits.check_entry(b"k1", &[0u8; 9]).unwrap_err();
        assert_eq!(err.to_string(), "value size 9 exceeds limit of 8 bytes");
    }
}
