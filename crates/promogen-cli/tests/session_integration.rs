//! Integration tests for whole interactive sessions.
//!
//! Each test scripts stdin, runs `shell::run` against a real store, and checks
//! both the console transcript and what ended up persisted.

use std::io::Cursor;
use std::path::PathBuf;

use promogen_cli::application::persistence::{PersistenceStore, StoreError};
use promogen_cli::application::session::SessionController;
use promogen_cli::infrastructure::console::{shell, Console};
use promogen_cli::infrastructure::storage::json_store::JsonFileStore;
use promogen_cli::infrastructure::storage::memory::InMemoryStore;
use promogen_core::{
    timestamp_now, HistoryEntry, PartSpec, SettingsRecord, TemplateConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

type ScriptConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

// English; 2 parts joined by "-"; part 1 length 4, part 2 length 3, all
// defaults; then: keep settings, generate 2, stop.
const FIRST_RUN: &str = "2\n2\n-\n4\n\n\n\n\n3\n\n\n\n\nn\n2\nn\n";

fn run_script<S: PersistenceStore>(store: S, script: &str) -> (S, String) {
    run_bytes(store, script.as_bytes())
}

fn run_bytes<S: PersistenceStore>(store: S, input: &[u8]) -> (S, String) {
    let mut controller = SessionController::new(store, StdRng::seed_from_u64(7));
    let mut console: ScriptConsole = Console::new(Cursor::new(input.to_vec()), Vec::new());

    shell::run(&mut controller, &mut console).expect("session must end cleanly");

    let transcript = String::from_utf8(console.into_output()).expect("utf-8 output");
    (controller.into_store(), transcript)
}

fn saved(language: &str, config: TemplateConfig) -> SettingsRecord {
    SettingsRecord::new(language, config, timestamp_now())
}

fn is_code(code: &str) -> bool {
    let segments: Vec<&str> = code.split('-').collect();
    segments.len() == 2
        && segments[0].len() == 4
        && segments[1].len() == 3
        && code
            .chars()
            .all(|c| c == '-' || c.is_ascii_uppercase() || c.is_ascii_digit())
}

// ── First run ─────────────────────────────────────────────────────────────────

#[test]
fn test_first_run_authors_saves_and_generates() {
    // Arrange
    let store = InMemoryStore::new();

    // Act
    let (store, transcript) = run_script(store, FIRST_RUN);

    // Assert
    let record = store.settings().expect("settings must be saved");
    assert_eq!(record.language, "en");
    assert_eq!(
        record.promo_config,
        TemplateConfig::new(vec![PartSpec::new(4), PartSpec::new(3)], "-").unwrap()
    );
    assert_eq!(store.history().len(), 2);
    assert!(store.history().iter().all(|e| is_code(&e.code)));

    assert!(transcript.contains("✓ Settings saved"));
    assert!(transcript.contains("Total generated: 0"));
    assert!(transcript.contains("  Part 1: length 4 (letters, digits)"));
    assert!(transcript.contains(&format!("1. {}", store.history()[0].code)));
    assert!(transcript.contains(&format!("2. {}", store.history()[1].code)));
    assert!(transcript.contains("✓ Promo codes saved to history"));
    assert!(transcript.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_saved_settings_skip_authoring_and_use_stored_language() {
    // Arrange
    let config = TemplateConfig::new(vec![PartSpec::new(4), PartSpec::new(3)], "-").unwrap();
    let store = InMemoryStore::with_settings(saved("ru", config));

    // Act
    let (store, transcript) = run_script(store, "нет\n1\nнет\n");

    // Assert
    assert_eq!(store.settings_writes(), 0);
    assert_eq!(store.history().len(), 1);
    assert!(!transcript.contains("Choose language"));
    assert!(transcript.contains("=== Генератор промокодов ==="));
    assert!(transcript.contains("Всего сгенерировано: 0"));
    assert!(transcript.contains("До свидания!"));
}

// ── Loop behavior ─────────────────────────────────────────────────────────────

#[test]
fn test_invalid_count_restarts_loop_without_generating() {
    // Arrange
    let config = TemplateConfig::new(vec![PartSpec::new(4), PartSpec::new(3)], "-").unwrap();
    let store = InMemoryStore::with_settings(saved("en", config));

    // Act: "abc", then "0", then a valid 3
    let (store, transcript) = run_script(store, "n\nabc\nn\n0\nn\n3\nn\n");

    // Assert
    assert_eq!(transcript.matches("Please enter a positive integer!").count(), 2);
    assert_eq!(transcript.matches("Do you want to change").count(), 3);
    assert_eq!(store.history().len(), 3);
    assert_eq!(store.history_writes(), 1);
}

#[test]
fn test_non_utf8_count_is_an_invalid_number_not_a_crash() {
    // Arrange
    let config = TemplateConfig::new(vec![PartSpec::new(4), PartSpec::new(3)], "-").unwrap();
    let store = InMemoryStore::with_settings(saved("en", config));

    // Act
    let (store, transcript) = run_bytes(store, b"n\n\xC3\x28\nn\n1\nn\n");

    // Assert
    assert_eq!(transcript.matches("Please enter a positive integer!").count(), 1);
    assert_eq!(store.history().len(), 1);
    assert!(transcript.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_reconfigure_replaces_template_for_next_batch() {
    // Arrange
    let config = TemplateConfig::new(vec![PartSpec::new(4), PartSpec::new(3)], "-").unwrap();
    let store = InMemoryStore::with_settings(saved("en", config));
    // change settings: 1 part, separator "_", length 6, digits only, prefix "X"
    let script = "yes\n1\n_\n6\nno\nyes\nX\n\n2\nn\n";

    // Act
    let (store, transcript) = run_script(store, script);

    // Assert
    let expected = TemplateConfig::new(
        vec![PartSpec::new(6).with_classes(false, true).with_prefix("X")],
        "_",
    )
    .unwrap();
    assert_eq!(store.settings().unwrap().promo_config, expected);
    assert_eq!(store.settings().unwrap().language, "en");
    assert!(transcript.contains("Reconfiguring promo code format..."));
    for entry in store.history() {
        assert_eq!(entry.code.len(), 7);
        assert!(entry.code.starts_with('X'));
        assert!(entry.code[1..].chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_continue_runs_another_iteration() {
    let config = TemplateConfig::new(vec![PartSpec::new(4), PartSpec::new(3)], "-").unwrap();
    let store = InMemoryStore::with_settings(saved("en", config));

    let (store, transcript) = run_script(store, "n\n1\ny\nn\n2\nn\n");

    assert_eq!(store.history().len(), 3);
    assert_eq!(store.history_writes(), 2);
    assert_eq!(transcript.matches("Generated promo codes:").count(), 2);
}

#[test]
fn test_end_of_input_says_goodbye_and_keeps_saved_state() {
    // Arrange: authoring completes, input ends at the reconfigure prompt
    let script = "2\n1\n-\n5\n\n\n\n\n";

    // Act
    let (store, transcript) = run_script(InMemoryStore::new(), script);

    // Assert
    assert!(store.settings().is_some());
    assert!(store.history().is_empty());
    assert!(transcript.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_end_of_input_during_first_authoring_saves_nothing() {
    let (store, transcript) = run_script(InMemoryStore::new(), "1\n2\n");

    assert!(store.settings().is_none());
    assert!(transcript.trim_end().ends_with("До свидания!"));
}

// ── Store failures ────────────────────────────────────────────────────────────

/// Store whose history writes always fail.
struct ReadOnlyHistory {
    settings: SettingsRecord,
}

impl PersistenceStore for ReadOnlyHistory {
    fn load_settings(&self) -> Result<Option<SettingsRecord>, StoreError> {
        Ok(Some(self.settings.clone()))
    }

    fn save_settings(&mut self, _language: &str, _config: &TemplateConfig) -> Result<(), StoreError> {
        Ok(())
    }

    fn load_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(Vec::new())
    }

    fn append_history(&mut self, _codes: &[String]) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: PathBuf::from("promo_history.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        })
    }
}

#[test]
fn test_history_write_failure_is_reported_and_loop_continues() {
    // Arrange
    let config = TemplateConfig::new(vec![PartSpec::new(2)], "-").unwrap();
    let store = ReadOnlyHistory {
        settings: saved("en", config),
    };

    // Act: two attempts, then input ends
    let (_, transcript) = run_script(store, "n\n2\nn\n1\n");

    // Assert
    assert_eq!(transcript.matches("Error: I/O error accessing").count(), 2);
    assert!(!transcript.contains("Generated promo codes:"));
    assert!(transcript.trim_end().ends_with("Goodbye!"));
}

// ── File-backed runs ──────────────────────────────────────────────────────────

#[test]
fn test_second_run_reuses_files_and_extends_history_in_order() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act
    let (_, _) = run_script(JsonFileStore::in_dir(dir.path()), FIRST_RUN);
    let first = JsonFileStore::in_dir(dir.path()).load_history().unwrap();
    let (store, transcript) = run_script(JsonFileStore::in_dir(dir.path()), "n\n2\nn\n");

    // Assert
    let history = store.load_history().unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(history.len(), 4);
    assert_eq!(&history[..2], &first[..]);
    assert!(history.iter().all(|e| is_code(&e.code)));
    assert!(transcript.contains("Total generated: 2"));
    assert!(!transcript.contains("Choose language"));
}

#[test]
fn test_corrupt_settings_file_triggers_fresh_authoring() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::in_dir(dir.path());
    std::fs::write(store.settings_path(), "{ not json").unwrap();

    // Act
    let (store, transcript) = run_script(store, FIRST_RUN);

    // Assert
    assert!(transcript.contains("Choose language"));
    let record = store.load_settings().unwrap().expect("settings rewritten");
    assert_eq!(record.language, "en");
}
