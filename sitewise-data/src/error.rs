//! Error types raised while loading dataset snapshots.

use camino::Utf8PathBuf;
use sitewise_core::DatasetError;
use thiserror::Error;

/// Errors raised while reading or validating a dataset snapshot.
#[derive(Debug, Error)]
pub enum DatasetLoadError {
    /// Opening the snapshot file failed.
    #[error("failed to open dataset at {path}")]
    OpenFile {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The snapshot file was not a valid JSON dataset document.
    #[error("failed to parse dataset JSON at {path}")]
    Parse {
        /// File that failed to decode.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The decoded records failed validation.
    #[error("dataset at {path} is invalid")]
    Invalid {
        /// File or database the records came from.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: DatasetError,
    },
    /// Opening the `SQLite` database failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to open read-only SQLite database at {path}")]
    OpenDatabase {
        /// Requested database path.
        path: Utf8PathBuf,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or executing a database query failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to {operation} in {path}")]
    Query {
        /// Database the query ran against.
        path: Utf8PathBuf,
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error from `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A location identifier could not be represented as `u64`.
    #[cfg(feature = "store-sqlite")]
    #[error("location id {id} is outside the supported range")]
    LocationIdOutOfRange {
        /// Identifier read from `SQLite`.
        id: i64,
    },
}
