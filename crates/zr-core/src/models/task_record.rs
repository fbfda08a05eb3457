use crate::models::null_as_default;
use crate::{EntityId, TeacherRef};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task exactly as the gateway returns it.
///
/// Older endpoints send a single `assignedTo` object, newer ones send an
/// array (and sometimes only `assignedToIds`). The body may arrive as
/// `description` or `content`. Dates are kept raw here and parsed leniently
/// by the adapter in [`crate::Task::try_from_record`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, alias = "content")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<AssigneeField>,
    #[serde(default)]
    pub assigned_to_ids: Option<Vec<EntityId>>,
    #[serde(default)]
    pub registered_by: Option<TeacherRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub comment_count: Option<u32>,
}

/// The two assignee shapes seen on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssigneeField {
    Many(Vec<TeacherRef>),
    One(TeacherRef),
}

impl AssigneeField {
    pub fn into_vec(self) -> Vec<TeacherRef> {
        match self {
            Self::Many(list) => list,
            Self::One(single) => vec![single],
        }
    }
}

/// Accepts `YYYY-MM-DD` and anything starting with it (e.g. a full timestamp).
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Accepts RFC 3339 or a zone-less `YYYY-MM-DDTHH:MM:SS[.fff]`, read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}
