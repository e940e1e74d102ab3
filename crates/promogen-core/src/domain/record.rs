//! Records persisted between runs: the settings singleton and history entries.
//!
//! Timestamps are local wall-clock times without an offset, serialised as
//! ISO-8601 (`2024-05-01T12:34:56.123456`).

use chrono::{NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use super::template::TemplateConfig;

/// Local wall-clock timestamp stored in settings and history.
pub type Timestamp = NaiveDateTime;

/// The current local time, truncated to microseconds.
pub fn timestamp_now() -> Timestamp {
    chrono::Local::now().naive_local().trunc_subsecs(6)
}

/// The single live settings record.  Every save replaces it entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRecord {
    /// Interface language tag (`"ru"`, `"en"`).  Opaque to this crate.
    pub language: String,
    pub promo_config: TemplateConfig,
    /// When the record was last written.
    pub last_used: Timestamp,
}

impl SettingsRecord {
    pub fn new(language: impl Into<String>, promo_config: TemplateConfig, last_used: Timestamp) -> Self {
        Self {
            language: language.into(),
            promo_config,
            last_used,
        }
    }
}

/// One generated code in the history log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub code: String,
    pub generated_at: Timestamp,
}

impl HistoryEntry {
    /// One entry per code, in order, all stamped with `at`.
    pub fn batch<S: AsRef<str>>(codes: &[S], at: Timestamp) -> Vec<HistoryEntry> {
        codes
            .iter()
            .map(|code| HistoryEntry {
                code: code.as_ref().to_string(),
                generated_at: at,
            })
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
