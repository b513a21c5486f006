//! Trainer creation/update form

use crate::models::TrainerDraft;

use super::{check_email, check_required, FieldError};

/// Input for creating or updating a trainer.
#[derive(Debug, Clone, Default)]
pub struct TrainerForm {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Opaque credential hash.
    pub password_hash: String,
}

impl TrainerForm {
    /// Run the submission gate.
    ///
    /// Returns a draft ready to submit, or every failed check. A failed
    /// gate performs no network calls.
    pub fn validate(&self) -> Result<TrainerDraft, Vec<FieldError>> {
        let mut errors = Vec::new();
        check_required("name", &self.name, &mut errors);
        check_email("email", &self.email, &mut errors);
        check_required("password_hash", &self.password_hash, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TrainerDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password_hash: self.password_hash.trim().to_string(),
        })
    }
}
