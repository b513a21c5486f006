//! Test utilities
//!
//! Builders for persisted-looking records, plus temp-file helpers for
//! configuration tests.

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::models::{Client, PersonRef, RecordId, Routine, Session, SessionDuration, Trainer};

/// Create a temporary directory for testing
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Create a test file with the given content
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

fn email_for(name: &str) -> String {
    format!("{}@open.trainer", name.to_lowercase().replace(' ', "."))
}

/// A trainer as the server would return it.
pub fn sample_trainer(id: RecordId, name: &str) -> Trainer {
    Trainer {
        id: Some(id),
        name: name.to_string(),
        email: email_for(name),
        password_hash: format!("hash-{}", id),
    }
}

/// A client as the server would return it, owned by the given trainer id.
pub fn sample_client(id: RecordId, name: &str, trainer_id: RecordId) -> Client {
    Client {
        id: Some(id),
        name: name.to_string(),
        email: email_for(name),
        password_hash: format!("hash-{}", id),
        trainer: sample_trainer(trainer_id, "Arnold Coleman"),
    }
}

/// A session as the server would return it.
pub fn sample_session(id: RecordId, note: &str) -> Session {
    Session {
        id: Some(id),
        date: NaiveDate::from_ymd_opt(2025, 11, 17).expect("valid date"),
        note: note.to_string(),
        duration: SessionDuration::from_minutes(60).expect("valid duration"),
        client: PersonRef {
            id: 1,
            name: "John Jones".to_string(),
        },
        trainer: PersonRef {
            id: 1,
            name: "Arnold Coleman".to_string(),
        },
        routine: Routine::FullBodyStrength,
    }
}
