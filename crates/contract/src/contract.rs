//! Ledger access service for [`HashFile`] records.
//!
//! [`HashFileContract`] owns the rules that sit between callers and the
//! ledger: which key states count as absent, how errors are classified, how
//! range scans become typed results, and how user filtering is applied.
//!
//! # Key Lifecycle
//!
//! ```text
//! ┌─────────────┐  create   ┌─────────────┐  change_file_hash
//! │   Absent    │──────────►│   Present   │◄──────────┐
//! └─────────────┘           └──────┬──────┘           │
//!                                  └──────────────────┘
//! ```
//!
//! There is no delete; a key never returns to absent.
//!
//! # Absent Values
//!
//! The hosting ledger reports a missing key as an empty value, so point reads
//! treat an empty stored value the same as a missing key. Range scans still
//! see empty values; [`query_user`](HashFileContract::query_user) rejects them.

use bytes::Bytes;
use hashfile_storage::{ConfigError, KeyValue, SizeLimits, StateBackend, StorageError};
use tracing::{debug, warn};

use crate::{
    config::{ContractConfig, FieldMapping},
    error::{ContractError, ContractResult},
    record::{self, HashFile, HashFileQueryResult},
};

/// Record access service over an injected [`StateBackend`].
///
/// The contract holds no mutable state. Consistency and isolation between
/// invocations are the ledger's responsibility.
///
/// # Example
///
/// ```
/// use hashfile_contract::HashFileContract;
/// use hashfile_storage::MemoryBackend;
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let contract = HashFileContract::new(MemoryBackend::new());
///
/// contract.create_hash_file("k1", "a.txt", "alice", "deadbeef", "2024-01-01").await?;
/// let updated = contract.change_file_hash("k1", "cafebabe").await?;
///
/// assert_eq!(updated.filehash(), "cafebabe");
/// # Ok::<(), hashfile_contract::ContractError>(())
/// # }).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct HashFileContract<B> {
    backend: B,
    field_mapping: FieldMapping,
    limits: SizeLimits,
}

impl<B: StateBackend> HashFileContract<B> {
    /// Creates a contract with the default configuration.
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend, field_mapping: FieldMapping::default(), limits: SizeLimits::default() }
    }

    /// Creates a contract with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    pub fn with_config(backend: B, config: ContractConfig) -> Result<Self, ConfigError> {
        let limits = config.size_limits()?;
        Ok(Self { backend, field_mapping: config.field_mapping(), limits })
    }

    /// Returns the underlying backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the field mapping applied on writes.
    #[must_use]
    pub fn field_mapping(&self) -> FieldMapping {
        self.field_mapping
    }

    /// Reads `key`, treating an empty value as absent.
    async fn read_state(&self, key: &str) -> ContractResult<Option<Bytes>> {
        if key.is_empty() {
            return Err(ContractError::InvalidKey);
        }
        let value = self.backend.get(key.as_bytes()).await?;
        Ok(value.filter(|bytes| !bytes.is_empty()))
    }

    async fn write_record(&self, key: &str, file: &HashFile) -> ContractResult<()> {
        let body = record::encode(file).map_err(|e| ContractError::malformed(key, e))?;
        self.limits.check_entry(key.as_bytes(), body.as_bytes())?;
        self.backend.set(key.as_bytes().to_vec(), body.into_bytes()).await?;
        Ok(())
    }

    async fn scan_all(&self) -> ContractResult<Vec<KeyValue>> {
        Ok(self.backend.get_state_by_range("", "").await?)
    }

    /// Pairs a scanned entry with its key. Scanned keys must be UTF-8.
    fn decode_entry(kv: &KeyValue) -> ContractResult<HashFileQueryResult> {
        let Some(key) = kv.key_str() else {
            warn!(key = ?kv.key, "Non-UTF-8 key aborted scan");
            return Err(StorageError::serialization(format!(
                "ledger key {:?} is not valid UTF-8",
                kv.key
            ))
            .into());
        };
        match record::decode(&kv.value) {
            Ok(file) => Ok(HashFileQueryResult::new(key, file)),
            Err(e) => {
                warn!(key = %key, error = %e, "Malformed record aborted scan");
                Err(ContractError::malformed(key, e))
            },
        }
    }

    fn encode_scan(results: &[HashFileQueryResult]) -> ContractResult<String> {
        record::encode_results(results).map_err(|e| {
            ContractError::from(StorageError::serialization_with_source("encode scan results", e))
        })
    }

    /// Stores a new record under `key`.
    ///
    /// The values are stored verbatim according to the configured
    /// [`FieldMapping`].
    ///
    /// # Errors
    ///
    /// - [`ContractError::AlreadyExists`] if `key` already holds a record; nothing is written
    /// - [`ContractError::InvalidKey`] if `key` is empty
    /// - [`ContractError::Storage`] if the entry exceeds the size limits or the ledger fails
    #[tracing::instrument(skip(self, filename, filehash, filedate))]
    pub async fn create_hash_file(
        &self,
        key: &str,
        filename: &str,
        username: &str,
        filehash: &str,
        filedate: &str,
    ) -> ContractResult<HashFile> {
        if self.read_state(key).await?.is_some() {
            warn!(key, "FileHash already exists");
            return Err(ContractError::already_exists(key));
        }

        let file = self.field_mapping.created(filename, username, filehash, filedate);
        self.write_record(key, &file).await?;

        debug!(key, filename, filedate, "Created file hash record");
        Ok(file)
    }

    /// Loads and decodes the record stored under `key`.
    ///
    /// # Errors
    ///
    /// - [`ContractError::FileNotFound`] if nothing is stored under `key`
    /// - [`ContractError::MalformedRecord`] if the stored value does not decode
    /// - [`ContractError::InvalidKey`] if `key` is empty
    #[tracing::instrument(skip(self))]
    pub async fn get_file(&self, key: &str) -> ContractResult<HashFile> {
        let Some(bytes) = self.read_state(key).await? else {
            warn!(key, "File does not exist");
            return Err(ContractError::file_not_found(key));
        };

        record::decode(&bytes).map_err(|e| ContractError::malformed(key, e))
    }

    /// Point query returning the record as freshly encoded JSON text.
    ///
    /// The text is re-encoded from the decoded record, not the raw ledger
    /// bytes, so it is always in canonical form.
    ///
    /// # Errors
    ///
    /// Same as [`get_file`](Self::get_file).
    #[tracing::instrument(skip(self))]
    pub async fn query_file(&self, key: &str) -> ContractResult<String> {
        let file = self.get_file(key).await?;
        record::encode(&file).map_err(|e| ContractError::malformed(key, e))
    }

    /// Scans the whole keyspace and decodes every entry, in ascending key order.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::MalformedRecord`] if any entry fails to decode;
    /// no partial result is returned.
    #[tracing::instrument(skip(self))]
    pub async fn list_files(&self) -> ContractResult<Vec<HashFileQueryResult>> {
        let entries = self.scan_all().await?;
        let results =
            entries.iter().map(Self::decode_entry).collect::<ContractResult<Vec<_>>>()?;

        debug!(count = results.len(), "Scanned all file hash records");
        Ok(results)
    }

    /// Full scan encoded as a JSON array of `{"Key", "Record"}` objects.
    ///
    /// An empty ledger yields `[]`.
    ///
    /// # Errors
    ///
    /// Same as [`list_files`](Self::list_files).
    #[tracing::instrument(skip(self))]
    pub async fn query_all_hash_file(&self) -> ContractResult<String> {
        let results = self.list_files().await?;
        Self::encode_scan(&results)
    }

    /// Returns the records owned by `username`, in ascending key order.
    ///
    /// There is no index by user: every entry in the ledger is read and
    /// decoded before filtering, so the cost grows with the total number of
    /// records. Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// - [`ContractError::UserNotFound`] if any scanned entry holds an empty value (the scan stops
    ///   there) or if no record matches
    /// - [`ContractError::MalformedRecord`] if any entry fails to decode
    #[tracing::instrument(skip(self))]
    pub async fn list_files_by_user(
        &self,
        username: &str,
    ) -> ContractResult<Vec<HashFileQueryResult>> {
        let entries = self.scan_all().await?;

        let mut results = Vec::with_capacity(entries.len());
        for kv in &entries {
            if kv.value.is_empty() {
                warn!(username, key = %String::from_utf8_lossy(&kv.key), "Empty value in user scan");
                return Err(ContractError::user_not_found(username));
            }
            results.push(Self::decode_entry(kv)?);
        }
        let scanned = results.len();

        let matching: Vec<_> =
            results.into_iter().filter(|r| r.record.username() == username).collect();
        debug!(scanned, matched = matching.len(), "Filtered file hash records by user");

        if matching.is_empty() {
            warn!(username, "No files registered for user");
            return Err(ContractError::user_not_found(username));
        }

        Ok(matching)
    }

    /// User scan encoded as a JSON array of `{"Key", "Record"}` objects.
    ///
    /// # Errors
    ///
    /// Same as [`list_files_by_user`](Self::list_files_by_user).
    #[tracing::instrument(skip(self))]
    pub async fn query_user(&self, username: &str) -> ContractResult<String> {
        let results = self.list_files_by_user(username).await?;
        Self::encode_scan(&results)
    }

    /// Replaces the hash of the record under `key`, keeping its other fields.
    ///
    /// Performs exactly one read and one write. There is no concurrency
    /// check; the last writer wins.
    ///
    /// # Errors
    ///
    /// - [`ContractError::FileNotFound`] if nothing is stored under `key`
    /// - [`ContractError::MalformedRecord`] if the stored value does not decode
    /// - [`ContractError::Storage`] if the entry exceeds the size limits or the ledger fails
    #[tracing::instrument(skip(self))]
    pub async fn change_file_hash(&self, key: &str, new_filehash: &str) -> ContractResult<HashFile> {
        let existing = self.get_file(key).await?;

        let updated = self.field_mapping.rehashed(&existing, new_filehash);
        self.write_record(key, &updated).await?;

        debug!(key, "Changed file hash");
        Ok(updated)
    }

    /// Seeds the ledger, writing the i-th record under the key `"i"`.
    ///
    /// Existing values under those keys are overwritten. Returns the number
    /// of records written.
    ///
    /// # Errors
    ///
    /// Stops at the first failed write and returns its error; earlier writes
    /// stay applied.
    #[tracing::instrument(skip(self, files), fields(count = files.len()))]
    pub async fn init_ledger(&self, files: &[HashFile]) -> ContractResult<usize> {
        for (i, file) in files.iter().enumerate() {
            self.write_record(&i.to_string(), file).await?;
        }

        debug!(count = files.len(), "Initialised ledger");
        Ok(files.len())
    }
}
