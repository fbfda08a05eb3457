use crate::models::null_as_default;
use crate::{EntityId, TeacherRef, parse_timestamp};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display name used when a comment arrives without any author object.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Comment as sent by the gateway; the author sits under `teacher` or `author`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub teacher: Option<TeacherRef>,
    #[serde(default)]
    pub author: Option<TeacherRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: EntityId,
    pub task_id: EntityId,
    pub content: String,
    pub author: Option<TeacherRef>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn from_record(task_id: &EntityId, record: CommentRecord) -> Self {
        Self {
            id: record.id,
            task_id: task_id.clone(),
            content: record.content,
            author: record.teacher.or(record.author),
            created_at: record.created_at.as_deref().and_then(parse_timestamp),
        }
    }

    pub fn author_name(&self) -> &str {
        match &self.author {
            Some(author) if !author.name.is_empty() => &author.name,
            _ => UNKNOWN_AUTHOR,
        }
    }

    /// A comment without a known author is never deletable.
    pub fn is_authored_by(&self, actor_id: &EntityId) -> bool {
        self.author.as_ref().is_some_and(|a| &a.id == actor_id)
    }
}
