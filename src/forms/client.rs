//! Client creation/update form

use crate::models::{ClientDraft, RecordId, Trainer};

use super::{check_email, check_required, FieldError};

/// Input for creating or updating a client.
///
/// The trainer is selected by id and must resolve against the currently
/// loaded trainer set; an unresolved reference fails the gate locally.
#[derive(Debug, Clone, Default)]
pub struct ClientForm {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Opaque credential hash.
    pub password_hash: String,
    /// Selected trainer id.
    pub trainer: Option<RecordId>,
}

impl ClientForm {
    /// Run the submission gate against the loaded trainer set.
    pub fn validate(&self, trainers: &[Trainer]) -> Result<ClientDraft, Vec<FieldError>> {
        let mut errors = Vec::new();
        check_required("name", &self.name, &mut errors);
        check_email("email", &self.email, &mut errors);
        check_required("password_hash", &self.password_hash, &mut errors);

        let trainer = match self.trainer {
            None => {
                errors.push(FieldError::required("trainer"));
                None
            }
            Some(id) => {
                let found = trainers.iter().find(|t| t.id == Some(id)).cloned();
                if found.is_none() {
                    errors.push(FieldError::invalid(
                        "trainer",
                        format!("no loaded trainer with id {}", id),
                    ));
                }
                found
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let trainer = trainer.ok_or_else(|| vec![FieldError::required("trainer")])?;

        Ok(ClientDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password_hash: self.password_hash.trim().to_string(),
            trainer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_trainer;

    fn filled_form() -> ClientForm {
        ClientForm {
            name: "James Rowe".to_string(),
            email: "james@open.trainer".to_string(),
            password_hash: "h7".to_string(),
            trainer: Some(1),
        }
    }

    #[test]
    fn test_valid_form_resolves_trainer() {
        let trainers = vec![sample_trainer(1, "John Addams")];
        let draft = filled_form().validate(&trainers).unwrap();
        assert_eq!(draft.trainer.id, Some(1));
        assert_eq!(draft.trainer.name, "John Addams");
    }

    #[test]
    fn test_missing_trainer_selection_fails_gate() {
        let mut form = filled_form();
        form.trainer = None;
        let errors = form.validate(&[sample_trainer(1, "John Addams")]).unwrap_err();
        assert_eq!(errors, vec![FieldError::required("trainer")]);
    }

    #[test]
    fn test_unresolved_trainer_reference_fails_gate() {
        let errors = filled_form()
            .validate(&[sample_trainer(9, "Someone Else")])
            .unwrap_err();
        assert_eq!(errors[0].field, "trainer");
        assert!(errors[0].message.contains("id 1"));
    }

    #[test]
    fn test_empty_trainer_set_fails_gate() {
        // Nothing loaded yet: the cross-reference cannot resolve.
        let errors = filled_form().validate(&[]).unwrap_err();
        assert_eq!(errors[0].field, "trainer");
    }
}
