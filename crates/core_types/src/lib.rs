//! Core types for the project board.
//!
//! This crate defines the project record as the backend serves it,
//! along with the deadline parsing and formatting rules shared by the
//! browser client and the development server.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Backend-assigned project identifier.
pub type ProjectId = i64;

/// Format used when a deadline is shown to a user.
pub const DEADLINE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Placeholder rendered for a label the backend did not send.
pub const MISSING_LABEL: &str = "-";

/// Naive timestamp layouts accepted in addition to RFC 3339.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Layout used when a naive timestamp is written back out.
const NAIVE_WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Errors from parsing a timestamp.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp is empty")]
    Empty,

    #[error("invalid timestamp: {0}")]
    Invalid(String),
}

/// A point in time as a backend or a form sent it.
///
/// Timestamps with an offset are exact instants and are shown in the
/// viewer's zone. Naive timestamps are wall-clock readings without a
/// zone (`datetime-local` inputs, backends storing naive columns) and
/// are shown exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    Exact(DateTime<Utc>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Display text in the given zone. Naive values ignore the zone.
    pub fn format_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            Timestamp::Exact(at) => at.with_timezone(tz).format(DEADLINE_DISPLAY_FORMAT).to_string(),
            Timestamp::Naive(at) => at.format(DEADLINE_DISPLAY_FORMAT).to_string(),
        }
    }

    /// The instant this timestamp denotes, reading a naive value as wall
    /// time in `tz`. `None` when that wall time does not exist there.
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Exact(at) => Some(*at),
            Timestamp::Naive(at) => tz
                .from_local_datetime(at)
                .earliest()
                .map(|local| local.with_timezone(&Utc)),
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Timestamp::Exact(at)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(at: NaiveDateTime) -> Self {
        Timestamp::Naive(at)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Exact(at) => f.write_str(&at.to_rfc3339()),
            Timestamp::Naive(at) => write!(f, "{}", at.format(NAIVE_WIRE_FORMAT)),
        }
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_timestamp(s)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// An opaque status or phase label.
///
/// The backend sends status as text and the current phase as a number,
/// so both shapes are accepted and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Number(i64),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(text) => f.write_str(text),
            Label::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Text(text.to_string())
    }
}

impl From<i64> for Label {
    fn from(n: i64) -> Self {
        Label::Number(n)
    }
}

/// A project record owned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier assigned by the backend
    pub id: ProjectId,
    /// Short project name
    pub name: String,
    /// Free-text description
    #[serde(default, deserialize_with = "deserialize_nullable_text")]
    pub description: String,
    /// Deadline, exact or naive as the backend sent it
    pub deadline: Timestamp,
    /// Status label
    #[serde(default)]
    pub status: Option<Label>,
    /// Current phase label
    #[serde(default)]
    pub current_phase: Option<Label>,
    /// When the backend created the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// When the backend last changed the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl Project {
    /// Create a project with no status or phase.
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        deadline: impl Into<Timestamp>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            deadline: deadline.into(),
            status: None,
            current_phase: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set both record timestamps to `at`.
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at.into());
        self.updated_at = Some(at.into());
        self
    }

    /// Set the status label.
    pub fn with_status(mut self, status: impl Into<Label>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the current phase label.
    pub fn with_phase(mut self, phase: impl Into<Label>) -> Self {
        self.current_phase = Some(phase.into());
        self
    }

    /// Status as display text.
    pub fn status_text(&self) -> String {
        label_text(self.status.as_ref())
    }

    /// Current phase as display text.
    pub fn phase_text(&self) -> String {
        label_text(self.current_phase.as_ref())
    }
}

fn label_text(label: Option<&Label>) -> String {
    label
        .map(|l| l.to_string())
        .unwrap_or_else(|| MISSING_LABEL.to_string())
}

/// Parse a timestamp sent by a backend or typed into a form.
///
/// RFC 3339 timestamps become [`Timestamp::Exact`]; the naive layouts
/// become [`Timestamp::Naive`] with no zone assumed.
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, TimestampError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TimestampError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Timestamp::Exact(dt.with_timezone(&Utc)));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(Timestamp::Naive)
        .ok_or_else(|| TimestampError::Invalid(raw.to_string()))
}

fn deserialize_nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Timelike};

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 5, 1, 12, 30, 0).unwrap()
    }

    fn wall_clock() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 5, 1)
            .and_then(|d| d.and_hms_opt(12, 30, 0))
            .unwrap()
    }

    #[test]
    fn test_parse_timestamp_rfc3339_keeps_offset() {
        let parsed = parse_timestamp("2030-05-01T14:30:00+02:00").unwrap();

        assert_eq!(parsed, Timestamp::Exact(instant()));
    }

    #[test]
    fn test_parse_timestamp_naive_stays_naive() {
        assert_eq!(
            parse_timestamp("2030-05-01T12:30:00").unwrap(),
            Timestamp::Naive(wall_clock())
        );
        assert_eq!(
            parse_timestamp("2030-05-01 12:30:00").unwrap(),
            Timestamp::Naive(wall_clock())
        );

        let Timestamp::Naive(fractional) = parse_timestamp("2030-05-01T12:30:00.250").unwrap() else {
            panic!("expected a naive timestamp");
        };
        assert_eq!(fractional.nanosecond(), 250_000_000);
    }

    #[test]
    fn test_parse_timestamp_datetime_local_input() {
        assert_eq!(
            parse_timestamp("2030-05-01T12:30").unwrap(),
            Timestamp::Naive(wall_clock())
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert_eq!(parse_timestamp("   "), Err(TimestampError::Empty));
        assert!(matches!(
            parse_timestamp("next tuesday"),
            Err(TimestampError::Invalid(_))
        ));
    }

    #[test]
    fn test_exact_timestamp_formats_in_zone() {
        let exact = Timestamp::Exact(instant());

        assert_eq!(exact.format_in(&Utc), "2030-05-01 12:30");
        assert_eq!(
            exact.format_in(&FixedOffset::east_opt(3 * 3600).unwrap()),
            "2030-05-01 15:30"
        );
    }

    #[test]
    fn test_naive_timestamp_formats_as_written() {
        let naive = parse_timestamp("2030-05-01T12:30:00").unwrap();

        assert_eq!(naive.format_in(&FixedOffset::west_opt(3 * 3600).unwrap()), "2030-05-01 12:30");
        assert_eq!(naive.format_in(&FixedOffset::east_opt(9 * 3600).unwrap()), "2030-05-01 12:30");
    }

    #[test]
    fn test_resolve_reads_naive_in_zone() {
        let naive = Timestamp::Naive(wall_clock());
        let east = FixedOffset::east_opt(2 * 3600).unwrap();

        assert_eq!(naive.resolve(&Utc), Some(instant()));
        assert_eq!(
            naive.resolve(&east),
            Some(Utc.with_ymd_and_hms(2030, 5, 1, 10, 30, 0).unwrap())
        );
        assert_eq!(Timestamp::Exact(instant()).resolve(&east), Some(instant()));
    }

    #[test]
    fn test_timestamp_wire_text() {
        assert_eq!(Timestamp::Naive(wall_clock()).to_string(), "2030-05-01T12:30:00");
        assert_eq!(Timestamp::Exact(instant()).to_string(), "2030-05-01T12:30:00+00:00");
    }

    #[test]
    fn test_project_deserializes_backend_shape() {
        let json = r#"{
            "id": 7,
            "name": "Website",
            "description": "Relaunch the marketing site",
            "deadline": "2030-05-01T12:30:00",
            "status": "Iniciado",
            "current_phase": 1,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": "2024-01-01T00:00:00"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.id, 7);
        assert_eq!(project.deadline, Timestamp::Naive(wall_clock()));
        assert_eq!(project.status, Some(Label::Text("Iniciado".to_string())));
        assert_eq!(project.current_phase, Some(Label::Number(1)));
        assert_eq!(project.phase_text(), "1");
        assert!(project.created_at.is_some());
        assert!(project.updated_at.is_some());
    }

    #[test]
    fn test_project_missing_labels_render_placeholder() {
        let json = r#"{"id": 1, "name": "Bare", "description": null, "deadline": "2030-05-01T12:30:00Z"}"#;

        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.description, "");
        assert_eq!(project.status_text(), MISSING_LABEL);
        assert_eq!(project.phase_text(), MISSING_LABEL);
        assert_eq!(project.created_at, None);
    }

    #[test]
    fn test_project_rejects_bad_deadline() {
        let json = r#"{"id": 1, "name": "Bad", "deadline": "soon"}"#;

        assert!(serde_json::from_str::<Project>(json).is_err());
    }

    #[test]
    fn test_project_serialization() {
        let project = Project::new(3, "Docs", "Write the handbook", wall_clock())
            .with_status("Em andamento")
            .with_phase(2_i64)
            .stamped(instant());

        let json = serde_json::to_string(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, project);
        assert!(json.contains(r#""deadline":"2030-05-01T12:30:00""#));
    }
}
