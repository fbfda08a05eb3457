use crate::{CoreError, CoreResult, EntityId, Task, TaskStatus};

use chrono::NaiveDate;

/// Input for a new task. New tasks always start in `todo`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub content: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub assignee_ids: Vec<EntityId>,
}

impl TaskDraft {
    pub fn new(title: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)?;
        check_date_order(self.start_date, self.end_date)
    }
}

/// Edited fields of an existing task. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
    pub assignee_ids: Option<Vec<EntityId>>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> CoreResult<()> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(content) = &self.content {
            require_text("content", content)?;
        }
        check_date_order(self.start_date, self.end_date)
    }

    /// Validate as applied to `current`: a date the patch leaves alone is
    /// taken from the stored task before the order check.
    pub fn validate_against(&self, current: &Task) -> CoreResult<()> {
        self.validate()?;
        check_date_order(
            self.start_date.or(current.start_date),
            self.end_date.or(current.end_date),
        )
    }
}

#[track_caller]
fn require_text(field: &'static str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, "must not be empty"));
    }
    Ok(())
}

#[track_caller]
fn check_date_order(start: Option<NaiveDate>, end: Option<NaiveDate>) -> CoreResult<()> {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        return Err(CoreError::validation(
            "end_date",
            format!("end date {end} precedes start date {start}"),
        ));
    }
    Ok(())
}
