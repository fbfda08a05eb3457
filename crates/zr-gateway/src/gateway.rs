use crate::{CreateCommentRequest, CreateTaskRequest, GatewayResult, UpdateTaskRequest};

use zr_core::{CommentRecord, EntityId, TaskRecord, Teacher};

use async_trait::async_trait;

/// Remote calls the task board depends on.
///
/// Mutations answer with the server's record when it sends one that
/// parses; callers that only need the acknowledgement can ignore it.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    async fn list_tasks(&self) -> GatewayResult<Vec<TaskRecord>>;

    async fn create_task(&self, request: &CreateTaskRequest) -> GatewayResult<Option<TaskRecord>>;

    async fn update_task(
        &self,
        task_id: &EntityId,
        request: &UpdateTaskRequest,
    ) -> GatewayResult<Option<TaskRecord>>;

    async fn delete_task(&self, task_id: &EntityId) -> GatewayResult<()>;

    async fn list_comments(&self, task_id: &EntityId) -> GatewayResult<Vec<CommentRecord>>;

    async fn create_comment(
        &self,
        request: &CreateCommentRequest,
    ) -> GatewayResult<Option<CommentRecord>>;

    async fn delete_comment(&self, comment_id: &EntityId) -> GatewayResult<()>;

    async fn list_teachers(&self, page: u32, size: u32) -> GatewayResult<Vec<Teacher>>;

    async fn get_teacher(&self, teacher_id: &EntityId) -> GatewayResult<Teacher>;
}
