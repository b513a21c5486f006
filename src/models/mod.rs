//! Domain records for the OpenTrainer API
//!
//! Entities are plain serde records mirroring the server's JSON wire format.
//! Ids are assigned only by the server: freshly parsed records carry
//! `Some(id)`, drafts built locally never serialize one.

pub mod client;
pub mod session;
pub mod trainer;

pub use client::{Client, ClientDraft};
pub use session::{PersonRef, Routine, Session, SessionDraft, SessionDuration};
pub use trainer::{Trainer, TrainerDraft};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Server-assigned numeric identifier.
pub type RecordId = i64;

/// A record type backed by one remote collection endpoint.
///
/// Implementors tie a wire struct to its collection path segment and to the
/// draft payload sent on create/update. The draft intentionally has no id
/// field; persisted ids only ever come back from the server.
pub trait Record:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Payload submitted on create/update requests.
    type Draft: Clone + std::fmt::Debug + Serialize + Send + Sync + 'static;

    /// Path segment of the remote collection (e.g. `trainer`).
    const COLLECTION: &'static str;

    /// Server-assigned id, if this record has been persisted.
    fn id(&self) -> Option<RecordId>;

    /// Short human-readable label for list output.
    fn label(&self) -> String;
}
