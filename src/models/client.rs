//! Client record and draft

use serde::{Deserialize, Serialize};

use super::{Record, RecordId, Trainer};

/// A client (trainee) as returned by the `client` collection.
///
/// The owning trainer travels by value in the wire format, exactly as the
/// server returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
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
    /// Owning trainer.
    pub trainer: Trainer,
}

/// Draft payload for creating or updating a client.
///
/// The trainer reference must resolve to an already-loaded trainer before
/// submission; the form gate enforces that.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientDraft {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Opaque credential hash.
    #[serde(rename = "passwordHash")]
    pub password_hash: String,
    /// Owning trainer, resolved from the loaded trainer set.
    pub trainer: Trainer,
}

impl Record for Client {
    type Draft = ClientDraft;

    const COLLECTION: &'static str = "client";

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

    fn sample_json() -> &'static str {
        r#"{
            "id": 7,
            "name": "James Rowe",
            "email": "james@open.trainer",
            "passwordHash": "h7",
            "trainer": {"id": 1, "name": "John Addams", "email": "john@open.trainer", "passwordHash": "x1"}
        }"#
    }

    #[test]
    fn test_client_deserializes_with_embedded_trainer() {
        let client: Client = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(client.id, Some(7));
        assert_eq!(client.trainer.id, Some(1));
        assert_eq!(client.trainer.name, "John Addams");
    }

    #[test]
    fn test_draft_never_serializes_an_id() {
        let trainer: Trainer =
            serde_json::from_str(r#"{"id":1,"name":"John Addams"}"#).unwrap();
        let draft = ClientDraft {
            name: "John Bench".to_string(),
            email: "bench@open.trainer".to_string(),
            password_hash: "h".to_string(),
            trainer,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        // The embedded trainer keeps its server id so the backend can link it.
        assert_eq!(value["trainer"]["id"], 1);
    }
}
