//! The persistence port: what the session needs from storage.
//!
//! Two resources live behind this trait: the settings singleton and the
//! history log.  Loading is tolerant.  A resource that does not exist
//! ([`StoreError::Absent`]) or cannot be parsed ([`StoreError::Corrupt`])
//! comes back empty rather than as an error.  Only genuine I/O failures
//! reach the caller.
//!
//! The production implementation is
//! [`JsonFileStore`](crate::infrastructure::storage::json_store::JsonFileStore);
//! tests use
//! [`InMemoryStore`](crate::infrastructure::storage::memory::InMemoryStore) or
//! the generated `MockPersistenceStore`.

use std::path::PathBuf;

use promogen_core::{HistoryEntry, SettingsRecord, TemplateConfig};
use thiserror::Error;

/// Error type for persistence operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The resource does not exist yet.  Recoverable: loads return empty.
    #[error("no document at {path}")]
    Absent { path: PathBuf },

    /// The resource exists but is not a valid document.  Recoverable: loads
    /// return empty.
    #[error("corrupt document at {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be encoded for writing.
    #[error("failed to encode {path}: {reason}")]
    Encode { path: PathBuf, reason: String },
}

impl StoreError {
    /// `true` for the kinds that loads map to an empty result.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StoreError::Absent { .. } | StoreError::Corrupt { .. })
    }
}

/// Load/save surface for settings and history.
///
/// Implementations assume a single writer; nothing here is safe against a
/// second process touching the same resources.
#[cfg_attr(test, mockall::automock)]
pub trait PersistenceStore {
    /// Returns the saved settings, or `None` when absent or corrupt.
    fn load_settings(&self) -> Result<Option<SettingsRecord>, StoreError>;

    /// Replaces the settings record with `{language, config, now}`.
    fn save_settings(&mut self, language: &str, config: &TemplateConfig) -> Result<(), StoreError>;

    /// Returns the full history in generation order; empty when absent or
    /// corrupt.
    fn load_history(&self) -> Result<Vec<HistoryEntry>, StoreError>;

    /// Appends one entry per code, all sharing one timestamp, and rewrites the
    /// log.
    fn append_history(&mut self, codes: &[String]) -> Result<(), StoreError>;
}
