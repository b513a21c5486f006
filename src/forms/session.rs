//! Session creation/update form

use chrono::{Local, NaiveDate};

use crate::models::{Client, PersonRef, RecordId, Routine, SessionDraft, SessionDuration, Trainer};

use super::{check_required, FieldError};

/// Input for creating or updating a workout session.
///
/// Client, trainer, and routine selections must all resolve against the
/// currently loaded sets before any request is attempted.
#[derive(Debug, Clone)]
pub struct SessionForm {
    /// Free-form note describing the session.
    pub note: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Session length, `HH:MM:SS` (a bare minute count is also accepted).
    pub duration: String,
    /// Selected client id.
    pub client: Option<RecordId>,
    /// Selected trainer id.
    pub trainer: Option<RecordId>,
    /// Selected routine, by catalogue id or name.
    pub routine: Option<String>,
}

impl Default for SessionForm {
    fn default() -> Self {
        Self {
            note: String::new(),
            date: Local::now().date_naive().to_string(),
            duration: "01:00:00".to_string(),
            client: None,
            trainer: None,
            routine: None,
        }
    }
}

impl SessionForm {
    /// Run the submission gate against the loaded client and trainer sets.
    pub fn validate(
        &self,
        clients: &[Client],
        trainers: &[Trainer],
    ) -> Result<SessionDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        check_required("note", &self.note, &mut errors);

        let date = match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                errors.push(FieldError::invalid(
                    "date",
                    format!("expected YYYY-MM-DD, got {:?}", self.date),
                ));
                None
            }
        };

        let duration = match self.duration.parse::<SessionDuration>() {
            Ok(duration) => Some(duration),
            Err(message) => {
                errors.push(FieldError::invalid("duration", message));
                None
            }
        };

        let client = match self.client {
            None => {
                errors.push(FieldError::required("client"));
                None
            }
            Some(id) => match clients.iter().find(|c| c.id == Some(id)) {
                Some(client) => Some(PersonRef {
                    id,
                    name: client.name.clone(),
                }),
                None => {
                    errors.push(FieldError::invalid(
                        "client",
                        format!("no loaded client with id {}", id),
                    ));
                    None
                }
            },
        };

        let trainer = match self.trainer {
            None => {
                errors.push(FieldError::required("trainer"));
                None
            }
            Some(id) => match trainers.iter().find(|t| t.id == Some(id)) {
                Some(trainer) => Some(PersonRef {
                    id,
                    name: trainer.name.clone(),
                }),
                None => {
                    errors.push(FieldError::invalid(
                        "trainer",
                        format!("no loaded trainer with id {}", id),
                    ));
                    None
                }
            },
        };

        let routine = match self.routine.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push(FieldError::required("routine"));
                None
            }
            Some(input) => match Routine::parse(input) {
                Some(routine) => Some(routine),
                None => {
                    errors.push(FieldError::invalid(
                        "routine",
                        format!("unknown routine {:?}", input),
                    ));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        // All Options are Some here; the checks above pushed an error for
        // every None case.
        match (date, duration, client, trainer, routine) {
            (Some(date), Some(duration), Some(client), Some(trainer), Some(routine)) => {
                Ok(SessionDraft {
                    date,
                    note: self.note.trim().to_string(),
                    duration,
                    client,
                    trainer,
                    routine,
                })
            }
            _ => Err(vec![FieldError::invalid("form", "incomplete submission")]),
        }
    }
}
