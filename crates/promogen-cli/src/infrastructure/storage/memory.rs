//! In-memory persistence store for tests.
//!
//! Behaves like [`JsonFileStore`](super::json_store::JsonFileStore) without
//! touching the file system, and counts writes so tests can assert how often
//! each resource was rewritten.

use promogen_core::{timestamp_now, HistoryEntry, SettingsRecord, TemplateConfig};

use crate::application::persistence::{PersistenceStore, StoreError};

/// A [`PersistenceStore`] that keeps both resources in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    settings: Option<SettingsRecord>,
    history: Vec<HistoryEntry>,
    settings_writes: usize,
    history_writes: usize,
}

impl InMemoryStore {
    /// Creates an empty store, as on first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `record`.
    pub fn with_settings(record: SettingsRecord) -> Self {
        Self {
            settings: Some(record),
            ..Self::default()
        }
    }

    /// Seeds the history log.
    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }

    pub fn settings(&self) -> Option<&SettingsRecord> {
        self.settings.as_ref()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of successful `save_settings` calls.
    pub fn settings_writes(&self) -> usize {
        self.settings_writes
    }

    /// Number of successful `append_history` calls.
    pub fn history_writes(&self) -> usize {
        self.history_writes
    }
}

impl PersistenceStore for InMemoryStore {
    fn load_settings(&self) -> Result<Option<SettingsRecord>, StoreError> {
        Ok(self.settings.clone())
    }

    fn save_settings(&mut self, language: &str, config: &TemplateConfig) -> Result<(), StoreError> {
        self.settings = Some(SettingsRecord::new(language, config.clone(), timestamp_now()));
        self.settings_writes += 1;
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.history.clone())
    }

    fn append_history(&mut self, codes: &[String]) -> Result<(), StoreError> {
        self.history
            .extend(HistoryEntry::batch(codes, timestamp_now()));
        self.history_writes += 1;
        Ok(())
    }
}
