//! Workout session record, draft, and the fixed routine catalogue

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Record, RecordId};

/// Lightweight `{id, name}` reference to a client or trainer embedded in a
/// session. Extra fields returned by the server are ignored on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    /// Server-assigned id of the referenced record.
    pub id: RecordId,
    /// Display name at the time the reference was taken.
    #[serde(default)]
    pub name: String,
}

/// The fixed set of named workout routines.
///
/// The catalogue and its ids are stable; the server stores routines as
/// `{id, name}` objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "RoutineWire", try_from = "RoutineWire")]
pub enum Routine {
    /// Full Body Strength (id 1)
    FullBodyStrength,
    /// Cardio Endurance (id 2)
    CardioEndurance,
    /// Core Builder (id 3)
    CoreBuilder,
    /// Push (id 4)
    Push,
    /// Pull (id 5)
    Pull,
    /// Leg (id 6)
    Leg,
}

impl Routine {
    /// Every routine in catalogue order.
    pub const ALL: [Routine; 6] = [
        Routine::FullBodyStrength,
        Routine::CardioEndurance,
        Routine::CoreBuilder,
        Routine::Push,
        Routine::Pull,
        Routine::Leg,
    ];

    /// Stable catalogue id.
    pub fn id(self) -> RecordId {
        match self {
            Routine::FullBodyStrength => 1,
            Routine::CardioEndurance => 2,
            Routine::CoreBuilder => 3,
            Routine::Push => 4,
            Routine::Pull => 5,
            Routine::Leg => 6,
        }
    }

    /// Catalogue display name.
    pub fn name(self) -> &'static str {
        match self {
            Routine::FullBodyStrength => "Full Body Strength",
            Routine::CardioEndurance => "Cardio Endurance",
            Routine::CoreBuilder => "Core Builder",
            Routine::Push => "Push",
            Routine::Pull => "Pull",
            Routine::Leg => "Leg",
        }
    }

    /// Look up a routine by catalogue id.
    pub fn from_id(id: RecordId) -> Option<Self> {
        Self::ALL.into_iter().find(|routine| routine.id() == id)
    }

    /// Resolve user input: a catalogue id or a case-insensitive name.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if let Ok(id) = trimmed.parse::<RecordId>() {
            return Self::from_id(id);
        }
        Self::ALL
            .into_iter()
            .find(|routine| routine.name().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wire representation of a routine.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RoutineWire {
    id: RecordId,
    #[serde(default)]
    name: String,
}

impl From<Routine> for RoutineWire {
    fn from(routine: Routine) -> Self {
        Self {
            id: routine.id(),
            name: routine.name().to_string(),
        }
    }
}

impl TryFrom<RoutineWire> for Routine {
    type Error = String;

    fn try_from(wire: RoutineWire) -> Result<Self, Self::Error> {
        Routine::from_id(wire.id)
            .or_else(|| Routine::parse(&wire.name))
            .ok_or_else(|| format!("unknown routine: id={} name={:?}", wire.id, wire.name))
    }
}

/// Session length, canonically encoded as an `HH:MM:SS` string.
///
/// Older snapshots of the API wrote a bare minute count (`60` or `"60"`);
/// both are accepted on decode but the canonical form is always written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDuration {
    secs: u32,
}

impl SessionDuration {
    /// Build from hour/minute/second components.
    ///
    /// Returns `None` when minutes or seconds exceed 59, or when the total
    /// does not fit in a second count.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        if minutes >= 60 || seconds >= 60 {
            return None;
        }
        let secs = hours.checked_mul(3600)?.checked_add(minutes * 60 + seconds)?;
        Some(Self { secs })
    }

    /// Build from a whole number of minutes. Returns `None` when the total
    /// does not fit in a second count.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        minutes.checked_mul(60).map(|secs| Self { secs })
    }

    /// Total length in seconds.
    pub fn as_secs(self) -> u32 {
        self.secs
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.secs / 3600,
            (self.secs % 3600) / 60,
            self.secs % 60
        )
    }
}

impl FromStr for SessionDuration {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if let Ok(minutes) = trimmed.parse::<u32>() {
            return Self::from_minutes(minutes)
                .ok_or_else(|| format!("duration out of range: {:?}", input));
        }

        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() != 3 {
            return Err(format!("expected HH:MM:SS, got {:?}", input));
        }
        let hours = parts[0]
            .parse::<u32>()
            .map_err(|_| format!("invalid hours in {:?}", input))?;
        let minutes = parts[1]
            .parse::<u32>()
            .map_err(|_| format!("invalid minutes in {:?}", input))?;
        let seconds = parts[2]
            .parse::<u32>()
            .map_err(|_| format!("invalid seconds in {:?}", input))?;
        Self::from_hms(hours, minutes, seconds)
            .ok_or_else(|| format!("duration out of range in {:?}", input))
    }
}

impl Serialize for SessionDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SessionDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Text(String),
            Minutes(u32),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Wire::Minutes(minutes) => SessionDuration::from_minutes(minutes)
                .ok_or_else(|| serde::de::Error::custom("duration out of range")),
        }
    }
}

/// A workout session as returned by the `session` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Server-assigned id; absent on records that were never persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Calendar date of the session.
    pub date: NaiveDate,
    /// Free-form note describing the session.
    #[serde(default)]
    pub note: String,
    /// Session length.
    pub duration: SessionDuration,
    /// Attending client.
    pub client: PersonRef,
    /// Leading trainer.
    pub trainer: PersonRef,
    /// Catalogue routine performed.
    pub routine: Routine,
}

/// Draft payload for creating or updating a session.
///
/// Client and trainer references must resolve against the currently loaded
/// sets before submission; the form gate enforces that.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionDraft {
    /// Calendar date of the session.
    pub date: NaiveDate,
    /// Free-form note describing the session.
    pub note: String,
    /// Session length.
    pub duration: SessionDuration,
    /// Attending client.
    pub client: PersonRef,
    /// Leading trainer.
    pub trainer: PersonRef,
    /// Catalogue routine to perform.
    pub routine: Routine,
}

impl Record for Session {
    type Draft = SessionDraft;

    const COLLECTION: &'static str = "session";

    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn label(&self) -> String {
        format!("{} ({})", self.note, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routine_catalogue_ids_are_stable() {
        assert_eq!(Routine::FullBodyStrength.id(), 1);
        assert_eq!(Routine::Leg.id(), 6);
        assert_eq!(Routine::from_id(4), Some(Routine::Push));
        assert_eq!(Routine::from_id(99), None);
    }

    #[test]
    fn test_routine_parse_accepts_id_and_name() {
        assert_eq!(Routine::parse("2"), Some(Routine::CardioEndurance));
        assert_eq!(Routine::parse("core builder"), Some(Routine::CoreBuilder));
        assert_eq!(Routine::parse("deadlift"), None);
    }

    #[test]
    fn test_routine_wire_round_trip() {
        let json = serde_json::to_value(Routine::Pull).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["name"], "Pull");
        let back: Routine = serde_json::from_value(json).unwrap();
        assert_eq!(back, Routine::Pull);
    }

    #[test]
    fn test_routine_decodes_by_name_when_id_unknown() {
        let routine: Routine = serde_json::from_str(r#"{"id":0,"name":"Push"}"#).unwrap();
        assert_eq!(routine, Routine::Push);
    }

    #[test]
    fn test_duration_parses_canonical_form() {
        let duration: SessionDuration = "01:30:00".parse().unwrap();
        assert_eq!(duration.as_secs(), 5400);
        assert_eq!(duration.to_string(), "01:30:00");
    }

    #[test]
    fn test_duration_accepts_bare_minutes() {
        let duration: SessionDuration = "60".parse().unwrap();
        assert_eq!(duration, SessionDuration::from_minutes(60).unwrap());
        assert_eq!(duration.to_string(), "01:00:00");
    }

    #[test]
    fn test_duration_rejects_malformed_input() {
        assert!("1:2".parse::<SessionDuration>().is_err());
        assert!("aa:bb:cc".parse::<SessionDuration>().is_err());
        assert!("00:99:00".parse::<SessionDuration>().is_err());
    }

    #[test]
    fn test_duration_rejects_overflowing_input() {
        // Syntactically valid, but the total exceeds the second count.
        assert!("71582789".parse::<SessionDuration>().is_err());
        assert!("2000000:00:00".parse::<SessionDuration>().is_err());
        assert!(serde_json::from_str::<SessionDuration>("4294967295").is_err());
        assert_eq!(SessionDuration::from_minutes(u32::MAX), None);
        assert_eq!(SessionDuration::from_hms(u32::MAX, 0, 0), None);
    }

    #[test]
    fn test_duration_decodes_integer_minutes() {
        let duration: SessionDuration = serde_json::from_str("60").unwrap();
        assert_eq!(duration.as_secs(), 3600);
    }

    #[test]
    fn test_session_decodes_wire_format() {
        let json = r#"{
            "id": 1,
            "date": "2025-11-17",
            "note": "Test session note",
            "duration": "01:00:00",
            "client": {"id": 1, "name": "John Jones"},
            "trainer": {"id": 1, "name": "Arnold Coleman"},
            "routine": {"id": 1, "name": "Full Body Strength"}
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.id, Some(1));
        assert_eq!(session.date, NaiveDate::from_ymd_opt(2025, 11, 17).unwrap());
        assert_eq!(session.routine, Routine::FullBodyStrength);
        assert_eq!(session.client.name, "John Jones");
    }

    #[test]
    fn test_session_draft_never_serializes_an_id() {
        let draft = SessionDraft {
            date: NaiveDate::from_ymd_opt(2025, 11, 17).unwrap(),
            note: "Leg day".to_string(),
            duration: SessionDuration::from_minutes(45).unwrap(),
            client: PersonRef {
                id: 1,
                name: "John Jones".to_string(),
            },
            trainer: PersonRef {
                id: 1,
                name: "Arnold Coleman".to_string(),
            },
            routine: Routine::Leg,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["duration"], "00:45:00");
        assert_eq!(value["routine"]["id"], 6);
    }
}
