use crate::{
    CoreResult, EntityId, TaskRecord, TaskStatus, TeacherRef, parse_calendar_date,
    parse_timestamp,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,

    // Core fields
    pub title: String,
    pub content: String,

    // Schedule
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    // Workflow
    pub status: TaskStatus,

    // Assignment
    pub assignees: Vec<TeacherRef>,
    pub registrar: Option<TeacherRef>,

    pub comment_count: u32,

    // Audit
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Minimal task in the `todo` lane, mostly useful for tests and fixtures.
    pub fn new<I: Into<EntityId>>(id: I, title: &str) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            content: String::new(),
            start_date: None,
            end_date: None,
            status: TaskStatus::Todo,
            assignees: Vec::new(),
            registrar: None,
            comment_count: 0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_assignee(mut self, assignee: TeacherRef) -> Self {
        self.assignees.push(assignee);
        self
    }

    /// Normalize a gateway record.
    ///
    /// Fails only on an unrecognized status; every other malformed field
    /// falls back to an empty value.
    #[track_caller]
    pub fn try_from_record(record: TaskRecord) -> CoreResult<Self> {
        let status = TaskStatus::from_wire(&record.status)?;

        let mut assignees = record
            .assigned_to
            .map(|field| field.into_vec())
            .unwrap_or_default();
        for id in record.assigned_to_ids.unwrap_or_default() {
            if !assignees.iter().any(|a| a.id == id) {
                assignees.push(TeacherRef {
                    id,
                    name: String::new(),
                    color: None,
                });
            }
        }

        Ok(Self {
            id: record.id,
            title: record.title,
            content: record.description.unwrap_or_default(),
            start_date: record.start_date.as_deref().and_then(parse_calendar_date),
            end_date: record.end_date.as_deref().and_then(parse_calendar_date),
            status,
            assignees,
            registrar: record.registered_by,
            comment_count: record.comment_count.unwrap_or(0),
            created_at: record.created_at.as_deref().and_then(parse_timestamp),
            updated_at: record.updated_at.as_deref().and_then(parse_timestamp),
        })
    }

    /// Comma-joined assignee names, skipping assignees known only by id.
    pub fn assignee_display(&self) -> String {
        self.assignees
            .iter()
            .filter(|a| !a.name.is_empty())
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn assignee_ids(&self) -> Vec<EntityId> {
        self.assignees.iter().map(|a| a.id.clone()).collect()
    }

    pub fn is_assigned_to(&self, teacher_id: &EntityId) -> bool {
        self.assignees.iter().any(|a| &a.id == teacher_id)
    }
}
