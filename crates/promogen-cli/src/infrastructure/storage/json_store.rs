//! JSON file persistence for settings and history.
//!
//! Two documents live in the data directory:
//!
//! - `promo_settings.json` – the settings singleton:
//!
//!   ```json
//!   {
//!     "language": "en",
//!     "promo_config": {
//!       "parts": [
//!         { "length": 4, "use_letters": true, "use_digits": true, "prefix": "", "suffix": "" }
//!       ],
//!       "separator": "-"
//!     },
//!     "last_used": "2024-05-01T12:34:56.123456"
//!   }
//!   ```
//!
//! - `promo_history.json` – every generated code, oldest first:
//!
//!   ```json
//!   [ { "code": "AB12-CD34", "generated_at": "2024-05-01T12:34:56.123456" } ]
//!   ```
//!
//! Both are pretty-printed UTF-8 and rewritten whole on every save.  A write
//! goes to a sibling `*.tmp` file first and is then renamed over the target,
//! so an interrupted write leaves the previous document in place.  A failed
//! rename removes the temp file.
//!
//! # Missing and corrupt documents
//!
//! A missing file is [`StoreError::Absent`]; unparseable JSON, a missing
//! required field, invalid UTF-8, or a stored template that fails validation
//! is [`StoreError::Corrupt`].  Loads turn both into an empty result.  A
//! corrupt history is replaced by the next append.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use promogen_core::{timestamp_now, HistoryEntry, SettingsRecord, TemplateConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::application::persistence::{PersistenceStore, StoreError};

/// Default file name of the settings document.
pub const SETTINGS_FILE_NAME: &str = "promo_settings.json";

/// Default file name of the history document.
pub const HISTORY_FILE_NAME: &str = "promo_history.json";

/// [`PersistenceStore`] backed by two JSON files.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    settings_path: PathBuf,
    history_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(settings_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: settings_path.into(),
            history_path: history_path.into(),
        }
    }

    /// Store using the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(SETTINGS_FILE_NAME), dir.join(HISTORY_FILE_NAME))
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    /// Reads the settings document, classifying every failure.
    fn read_settings(&self) -> Result<SettingsRecord, StoreError> {
        let record: SettingsRecord = read_document(&self.settings_path)?;
        record
            .promo_config
            .validate()
            .map_err(|e| StoreError::Corrupt {
                path: self.settings_path.clone(),
                reason: e.to_string(),
            })?;
        Ok(record)
    }
}

impl PersistenceStore for JsonFileStore {
    fn load_settings(&self) -> Result<Option<SettingsRecord>, StoreError> {
        recover(self.read_settings())
    }

    fn save_settings(&mut self, language: &str, config: &TemplateConfig) -> Result<(), StoreError> {
        let record = SettingsRecord::new(language, config.clone(), timestamp_now());
        write_document(&self.settings_path, &record)?;
        debug!(path = %self.settings_path.display(), "settings saved");
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(recover(read_document(&self.history_path))?.unwrap_or_default())
    }

    fn append_history(&mut self, codes: &[String]) -> Result<(), StoreError> {
        let mut history = self.load_history()?;
        history.extend(HistoryEntry::batch(codes, timestamp_now()));
        write_document(&self.history_path, &history)?;
        debug!(
            path = %self.history_path.display(),
            appended = codes.len(),
            total = history.len(),
            "history saved"
        );
        Ok(())
    }
}

// ── Document I/O ──────────────────────────────────────────────────────────────

/// Maps the recoverable load failures to `None`.
fn recover<T>(result: Result<T, StoreError>) -> Result<Option<T>, StoreError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e @ StoreError::Absent { .. }) => {
            debug!("{e}; treating as empty");
            Ok(None)
        }
        Err(e @ StoreError::Corrupt { .. }) => {
            warn!("{e}; treating as empty");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(StoreError::Absent {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == ErrorKind::InvalidData => {
            return Err(StoreError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn write_document<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(value).map_err(|e| StoreError::Encode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let temp_path = temp_sibling(path);
    fs::write(&temp_path, content).map_err(|source| StoreError::Io {
        path: temp_path.clone(),
        source,
    })?;
    fs::rename(&temp_path, path).map_err(|source| {
        let _ = fs::remove_file(&temp_path);
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// `promo_history.json` → `promo_history.json.tmp`.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
