//! Trainer record and draft

use serde::{Deserialize, Serialize};

use super::{Record, RecordId};

/// A trainer as returned by the `trainer` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    /// Server-assigned id; absent on records that were never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Opaque credential hash; never interpreted client-side.
    #[serde(rename = "passwordHash", default)]
    pub password_hash: String,
}

/// Draft payload for creating or updating a trainer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerDraft {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Opaque credential hash.
    #[serde(rename = "passwordHash")]
    pub password_hash: String,
}

impl Record for Trainer {
    type Draft = TrainerDraft;

    const COLLECTION: &'static str = "trainer";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trainer_deserializes_wire_format() {
        let json = r#"{"id":1,"name":"John Addams","email":"john@open.trainer","passwordHash":"x1"}"#;
        let trainer: Trainer = serde_json::from_str(json).unwrap();
        assert_eq!(trainer.id, Some(1));
        assert_eq!(trainer.name, "John Addams");
        assert_eq!(trainer.password_hash, "x1");
    }

    #[test]
    fn test_trainer_tolerates_missing_optional_fields() {
        let json = r#"{"id":2,"name":"Jack Daniel"}"#;
        let trainer: Trainer = serde_json::from_str(json).unwrap();
        assert_eq!(trainer.id, Some(2));
        assert!(trainer.email.is_empty());
    }

    #[test]
    fn test_draft_never_serializes_an_id() {
        let draft = TrainerDraft {
            name: "Jim Beam".to_string(),
            email: "jim@open.trainer".to_string(),
            password_hash: "h".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["passwordHash"], "h");
    }

    #[test]
    fn test_collection_segment() {
        assert_eq!(Trainer::COLLECTION, "trainer");
    }
}
