use zr_core::{EntityId, TaskDraft, TaskPatch, TaskStatus};

use chrono::NaiveDate;
use serde::Serialize;

/// Body of `POST /tasks`. New tasks always start in `todo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub registered_by_id: EntityId,
    pub assigned_to_ids: Vec<EntityId>,
}

impl CreateTaskRequest {
    pub fn from_draft(draft: &TaskDraft, registered_by_id: EntityId) -> Self {
        Self {
            title: draft.title.trim().to_string(),
            description: draft.content.clone(),
            status: TaskStatus::Todo,
            start_date: draft.start_date,
            end_date: draft.end_date,
            registered_by_id,
            assigned_to_ids: draft.assignee_ids.clone(),
        }
    }
}

/// Body of `PUT /tasks/{id}`; absent fields are left alone by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_ids: Option<Vec<EntityId>>,
}

impl UpdateTaskRequest {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl From<&TaskPatch> for UpdateTaskRequest {
    fn from(patch: &TaskPatch) -> Self {
        Self {
            title: patch.title.as_ref().map(|t| t.trim().to_string()),
            description: patch.content.clone(),
            status: patch.status,
            start_date: patch.start_date,
            end_date: patch.end_date,
            assigned_to_ids: patch.assignee_ids.clone(),
        }
    }
}

/// Body of `POST /comments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: String,
    pub task_id: EntityId,
    pub teacher_id: EntityId,
}
