//! The `HashFile` record and its JSON codec.
//!
//! A [`HashFile`] is stored on the ledger as a JSON object with exactly four
//! string fields:
//!
//! ```json
//! {"filename":"a.txt","username":"alice","filehash":"deadbeef","filedate":"2024-01-01"}
//! ```
//!
//! The ledger key is not part of the body. Range scans pair each record with
//! its key in a [`HashFileQueryResult`], serialized as
//! `{"Key": "...", "Record": {...}}`.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{MapAccess, Visitor, value::MapAccessDeserializer},
};
use thiserror::Error;

/// Failure to encode or decode a [`HashFile`] body.
#[derive(Debug, Error)]
#[error("invalid HashFile record: {0}")]
pub struct CodecError(#[from] serde_json::Error);

/// A file's hash, owner, name and date.
///
/// Values are immutable; an update builds a replacement with
/// [`with_filehash`](HashFile::with_filehash). Equality is structural.
///
/// # Example
///
/// ```
/// use hashfile_contract::HashFile;
///
/// let file = HashFile::builder()
///     .filename("a.txt")
///     .username("alice")
///     .filehash("deadbeef")
///     .filedate("2024-01-01")
///     .build();
///
/// assert_eq!(file.username(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, bon::Builder)]
pub struct HashFile {
    #[builder(into)]
    filename: String,
    #[builder(into)]
    username: String,
    #[builder(into)]
    filehash: String,
    #[builder(into)]
    filedate: String,
}

impl HashFile {
    /// Name of the file.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// User who owns the file.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Hash of the file contents.
    #[must_use]
    pub fn filehash(&self) -> &str {
        &self.filehash
    }

    /// Date attached to the file.
    #[must_use]
    pub fn filedate(&self) -> &str {
        &self.filedate
    }

    /// Returns a copy of this record carrying `filehash` instead.
    #[must_use]
    pub fn with_filehash(&self, filehash: impl Into<String>) -> Self {
        Self { filehash: filehash.into(), ..self.clone() }
    }
}

/// Field set of a stored record. Only ever read through [`RecordVisitor`],
/// which admits JSON objects and nothing else.
#[derive(Deserialize)]
struct RecordFields {
    filename: String,
    username: String,
    filehash: String,
    filedate: String,
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = HashFile;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object with filename, username, filehash and filedate")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<HashFile, A::Error> {
        let RecordFields { filename, username, filehash, filedate } =
            RecordFields::deserialize(MapAccessDeserializer::new(map))?;
        Ok(HashFile { filename, username, filehash, filedate })
    }
}

// serde's derive also accepts a positional array; a stored record has to be
// an object.
impl<'de> Deserialize<'de> for HashFile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

/// A record paired with the ledger key it was read from.
///
/// Produced only by range scans; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashFileQueryResult {
    /// Ledger key the record is stored under.
    #[serde(rename = "Key")]
    pub key: String,

    /// The decoded record.
    #[serde(rename = "Record")]
    pub record: HashFile,
}

impl HashFileQueryResult {
    /// Pairs `record` with `key`.
    pub fn new(key: impl Into<String>, record: HashFile) -> Self {
        Self { key: key.into(), record }
    }
}

/// Encodes a record as its canonical JSON object.
///
/// # Errors
///
/// Returns [`CodecError`] if serialization fails.
pub fn encode(record: &HashFile) -> Result<String, CodecError> {
    Ok(serde_json::to_string(record)?)
}

/// Decodes a record from JSON bytes.
///
/// Unknown fields are ignored.
///
/// # Errors
///
/// Returns [`CodecError`] unless `bytes` is a JSON object holding all four
/// fields as strings.
pub fn decode(bytes: &[u8]) -> Result<HashFile, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Encodes scan results as a JSON array of `{"Key", "Record"}` objects.
///
/// # Errors
///
/// Returns [`CodecError`] if serialization fails.
pub fn encode_results(results: &[HashFileQueryResult]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(results)?)
}

/// Decodes a JSON array produced by [`encode_results`].
///
/// # Errors
///
/// Returns [`CodecError`] if `text` is not such an array.
pub fn decode_results(text: &str) -> Result<Vec<HashFileQueryResult>, CodecError> {
    Ok(serde_json::from_str(text)?)
}
