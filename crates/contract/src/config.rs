//! Configuration for [`HashFileContract`](crate::HashFileContract).
//!
//! [`ContractConfig`] can be built in code with
//! [`ContractConfig::builder`] or deserialized from any serde format:
//!
//! ```
//! use hashfile_contract::{ContractConfig, FieldMapping};
//!
//! let config: ContractConfig =
//!     serde_json::from_str(r#"{"field_mapping":"legacy","max_key_size":128}"#).unwrap();
//!
//! assert_eq!(config.field_mapping(), FieldMapping::Legacy);
//! assert_eq!(config.max_value_size(), 512 * 1024);
//! ```

use hashfile_storage::{ConfigError, DEFAULT_MAX_KEY_SIZE, DEFAULT_MAX_VALUE_SIZE, SizeLimits};
use serde::{Deserialize, Serialize};

use crate::record::HashFile;

/// How caller-supplied values are assigned to record fields on write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldMapping {
    /// Each value is stored in the field it is named after.
    #[default]
    Declared,

    /// Reproduces the field order used by the first generation of this
    /// contract, for ledgers whose records were already written that way.
    ///
    /// On create, the record holds `filename = filehash`,
    /// `username = filedate`, `filehash = filename`, `filedate = username`.
    /// On update, the new hash lands in `filedate` and the old date moves into
    /// `filehash`.
    Legacy,
}

impl FieldMapping {
    /// Builds the record written by a create.
    #[must_use]
    pub fn created(
        self,
        filename: &str,
        username: &str,
        filehash: &str,
        filedate: &str,
    ) -> HashFile {
        match self {
            Self::Declared => HashFile::builder()
                .filename(filename)
                .username(username)
                .filehash(filehash)
                .filedate(filedate)
                .build(),
            Self::Legacy => HashFile::builder()
                .filename(filehash)
                .username(filedate)
                .filehash(filename)
                .filedate(username)
                .build(),
        }
    }

    /// Builds the replacement written by a hash update.
    #[must_use]
    pub fn rehashed(self, existing: &HashFile, new_filehash: &str) -> HashFile {
        match self {
            Self::Declared => existing.with_filehash(new_filehash),
            Self::Legacy => HashFile::builder()
                .filename(existing.filename())
                .username(existing.username())
                .filehash(existing.filedate())
                .filedate(new_filehash)
                .build(),
        }
    }
}

fn default_max_key_size() -> usize {
    DEFAULT_MAX_KEY_SIZE
}

fn default_max_value_size() -> usize {
    DEFAULT_MAX_VALUE_SIZE
}

/// Settings for [`HashFileContract`](crate::HashFileContract).
///
/// | Field | Default |
/// |-------|---------|
/// | `field_mapping` | [`FieldMapping::Declared`] |
/// | `max_key_size` | 512 bytes |
/// | `max_value_size` | 512 KiB |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractConfig {
    #[serde(default)]
    field_mapping: FieldMapping,

    #[serde(default = "default_max_key_size")]
    max_key_size: usize,

    #[serde(default = "default_max_value_size")]
    max_value_size: usize,
}

#[bon::bon]
impl ContractConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BelowMinimum`] if either size limit is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use hashfile_contract::{ContractConfig, FieldMapping};
    ///
    /// let config = ContractConfig::builder()
    ///     .field_mapping(FieldMapping::Declared)
    ///     .max_key_size(64)
    ///     .build()?;
    /// # Ok::<(), hashfile_storage::ConfigError>(())
    /// ```
    #[builder]
    pub fn new(
        #[builder(default)] field_mapping: FieldMapping,
        #[builder(default = DEFAULT_MAX_KEY_SIZE)] max_key_size: usize,
        #[builder(default = DEFAULT_MAX_VALUE_SIZE)] max_value_size: usize,
    ) -> Result<Self, ConfigError> {
        let config = Self { field_mapping, max_key_size, max_value_size };
        config.validate()?;
        Ok(config)
    }

    /// Checks that the size limits are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BelowMinimum`] if either size limit is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.size_limits().map(|_| ())
    }

    /// The configured field mapping.
    #[must_use]
    pub fn field_mapping(&self) -> FieldMapping {
        self.field_mapping
    }

    /// Maximum key size in bytes.
    #[must_use]
    pub fn max_key_size(&self) -> usize {
        self.max_key_size
    }

    /// Maximum encoded record size in bytes.
    #[must_use]
    pub fn max_value_size(&self) -> usize {
        self.max_value_size
    }

    /// The size limits as a [`SizeLimits`] value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BelowMinimum`] if either size limit is zero.
    pub fn size_limits(&self) -> Result<SizeLimits, ConfigError> {
        SizeLimits::new(self.max_key_size, self.max_value_size)
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            field_mapping: FieldMapping::default(),
            max_key_size: DEFAULT_MAX_KEY_SIZE,
            max_value_size: DEFAULT_MAX_VALUE_SIZE,
        }
    }
}
