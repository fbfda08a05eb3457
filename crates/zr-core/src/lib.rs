pub mod error;
pub mod links;
pub mod models;
pub mod permission;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult};
pub use links::{ContentSegment, link_segments};
pub use models::board::{Board, Column};
pub use models::comment::{Comment, CommentRecord, UNKNOWN_AUTHOR};
pub use models::entity_id::EntityId;
pub use models::task::Task;
pub use models::task_draft::{TaskDraft, TaskPatch};
pub use models::task_record::{AssigneeField, TaskRecord, parse_calendar_date, parse_timestamp};
pub use models::task_status::TaskStatus;
pub use models::teacher::{MenuPermission, Teacher, TeacherRef};
pub use permission::{ADMIN_ROLE, Capability, can};
