use crate::{
    BoardError, BoardResult, BoardStore, DragEnd, DragOutcome, Notice, NoticeLog, UnmountSignal,
};

use zr_config::BoardConfig;
use zr_core::{
    Board, Capability, Comment, CoreError, EntityId, Task, TaskDraft, TaskPatch, Teacher, can,
};
use zr_gateway::{
    CreateCommentRequest, CreateTaskRequest, GatewayError, GatewayResult, TaskGateway,
    UpdateTaskRequest,
};

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, warn};

#[derive(Debug)]
struct BoardState {
    store: BoardStore,
    notices: NoticeLog,
    /// Tasks with a status update awaiting the server
    in_flight: HashSet<EntityId>,
    pending_delete: Option<EntityId>,
    assignee_filter: Option<EntityId>,
    comments: HashMap<EntityId, Vec<Comment>>,
}

/// Drives the task board: loads tasks, applies drags, gates mutations.
///
/// All entry points take `&self`; no lock is held across a gateway call.
pub struct TaskBoardController {
    gateway: Arc<dyn TaskGateway>,
    actor: Option<Teacher>,
    menu_code: String,
    state: Mutex<BoardState>,
    unmount: UnmountSignal,
}

impl TaskBoardController {
    pub fn new(gateway: Arc<dyn TaskGateway>, config: &BoardConfig) -> Self {
        Self {
            gateway,
            actor: None,
            menu_code: config.menu_code.clone(),
            state: Mutex::new(BoardState {
                store: BoardStore::new(),
                notices: NoticeLog::new(config.notice_capacity),
                in_flight: HashSet::new(),
                pending_delete: None,
                assignee_filter: None,
                comments: HashMap::new(),
            }),
            unmount: UnmountSignal::new(),
        }
    }

    /// The signed-in teacher whose permissions gate mutations.
    pub fn with_actor(mut self, actor: Option<Teacher>) -> Self {
        self.actor = actor;
        self
    }

    pub fn actor(&self) -> Option<&Teacher> {
        self.actor.as_ref()
    }

    pub fn menu_code(&self) -> &str {
        &self.menu_code
    }

    /// Whether the actor holds `capability` on this board's menu.
    pub fn can(&self, capability: Capability) -> bool {
        can(self.actor.as_ref(), &self.menu_code, capability)
    }

    // =========================================================================
    // View state
    // =========================================================================

    /// The unfiltered board.
    pub fn board(&self) -> Board {
        self.lock().store.board().clone()
    }

    /// The board as rendered, with the assignee filter applied.
    pub fn view(&self) -> Board {
        let state = self.lock();
        state.store.board().view(state.assignee_filter.as_ref())
    }

    pub fn set_assignee_filter(&self, assignee: Option<EntityId>) {
        self.lock().assignee_filter = assignee;
    }

    pub fn assignee_filter(&self) -> Option<EntityId> {
        self.lock().assignee_filter.clone()
    }

    pub fn drain_notices(&self) -> Vec<Notice> {
        self.lock().notices.drain()
    }

    pub fn pending_delete(&self) -> Option<EntityId> {
        self.lock().pending_delete.clone()
    }

    pub fn is_busy(&self, task_id: &EntityId) -> bool {
        self.lock().in_flight.contains(task_id)
    }

    /// Last loaded comments for a task.
    pub fn comments(&self, task_id: &EntityId) -> Vec<Comment> {
        self.lock()
            .comments
            .get(task_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether the delete action should be offered for `comment`.
    pub fn can_delete_comment(&self, comment: &Comment) -> bool {
        self.actor
            .as_ref()
            .is_some_and(|actor| comment.is_authored_by(&actor.id))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Cancel pending fetches; every later call returns `Cancelled`.
    pub fn unmount(&self) {
        self.unmount.trigger();
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmount.is_unmounted()
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    /// Replace the board with the server's task list.
    ///
    /// On failure the board is left as it was.
    pub async fn fetch_tasks(&self) -> BoardResult<usize> {
        self.ensure_mounted()?;

        let records = self
            .until_unmounted(self.gateway.list_tasks())
            .await?
            .map_err(|e| self.gateway_failed("list_tasks", "Failed to load tasks", e))?;

        let board = Board::from_records(records);
        let count = board.len();

        // Unmount may have landed while the response was being decoded
        self.ensure_mounted()?;
        self.lock().store.replace(board);

        info!("Loaded {count} tasks");
        Ok(count)
    }

    /// Apply a drag-end event.
    ///
    /// A move across columns is shown immediately and sent to the server;
    /// if the server refuses, the task goes back where it was.
    pub async fn on_drag_end(&self, event: DragEnd) -> BoardResult<DragOutcome> {
        self.ensure_mounted()?;

        let Some(destination) = event.destination else {
            return Ok(DragOutcome::Unchanged);
        };
        if destination == event.source {
            return Ok(DragOutcome::Unchanged);
        }
        let task_id = event.task_id;

        let (current, _) = {
            let state = self.lock();
            if state.in_flight.contains(&task_id) {
                return Err(BoardError::task_busy(&task_id));
            }
            state
                .store
                .board()
                .locate(&task_id)
                .ok_or_else(|| BoardError::task_not_found(&task_id))?
        };

        if current == destination.status {
            let mut state = self.lock();
            // Event indexes are positions in the filtered view
            let (status, index) = state
                .store
                .board()
                .locate(&task_id)
                .ok_or_else(|| BoardError::task_not_found(&task_id))?;
            let target = state.store.drop_index(
                &task_id,
                status,
                destination.index,
                state.assignee_filter.as_ref(),
            );
            state.store.reorder(status, index, target);
            debug!("Reordered task {task_id} within {}", status.column_key());
            return Ok(DragOutcome::Reordered);
        }

        self.require(Capability::Update)?;

        let previous = {
            let mut state = self.lock();
            if state.in_flight.contains(&task_id) {
                return Err(BoardError::task_busy(&task_id));
            }
            let target = state.store.drop_index(
                &task_id,
                destination.status,
                destination.index,
                state.assignee_filter.as_ref(),
            );
            let previous = state
                .store
                .move_task(&task_id, destination.status, target)
                .ok_or_else(|| BoardError::task_not_found(&task_id))?;
            state.in_flight.insert(task_id.clone());
            previous
        };
        let from = previous.status;

        let result = self
            .gateway
            .update_task(&task_id, &UpdateTaskRequest::status(destination.status))
            .await;

        let mut state = self.lock();
        state.in_flight.remove(&task_id);
        match result {
            Ok(_) => {
                info!(
                    "Moved task {task_id} from {} to {}",
                    from.wire_value(),
                    destination.status.wire_value()
                );
                Ok(DragOutcome::Moved {
                    from,
                    to: destination.status,
                })
            }
            Err(e) => {
                state.store.restore(previous);
                drop(state);
                warn!("Rolled back move of task {task_id}");
                Err(self.gateway_failed("update_task", "Failed to move task", e))
            }
        }
    }

    pub async fn create_task(&self, draft: TaskDraft) -> BoardResult<()> {
        self.ensure_mounted()?;
        self.require(Capability::Create)?;
        let actor_id = self.actor_id()?;
        draft.validate().map_err(|e| self.invalid(e))?;

        let request = CreateTaskRequest::from_draft(&draft, actor_id);
        self.gateway
            .create_task(&request)
            .await
            .map_err(|e| self.gateway_failed("create_task", "Failed to create task", e))?;

        info!("Created task \"{}\"", request.title);
        self.notify(Notice::success("Task created"));
        self.refresh().await;
        Ok(())
    }

    pub async fn update_task(&self, task_id: &EntityId, patch: TaskPatch) -> BoardResult<()> {
        self.ensure_mounted()?;
        self.require(Capability::Update)?;
        if patch.is_empty() {
            return Err(self.invalid(CoreError::validation("patch", "has no changes")));
        }
        let current = {
            let state = self.lock();
            if state.in_flight.contains(task_id) {
                return Err(BoardError::task_busy(task_id));
            }
            state.store.board().task(task_id).cloned()
        };
        let checked = match &current {
            Some(task) => patch.validate_against(task),
            None => patch.validate(),
        };
        checked.map_err(|e| self.invalid(e))?;

        self.gateway
            .update_task(task_id, &UpdateTaskRequest::from(&patch))
            .await
            .map_err(|e| self.gateway_failed("update_task", "Failed to update task", e))?;

        info!("Updated task {task_id}");
        self.notify(Notice::success("Task updated"));
        self.refresh().await;
        Ok(())
    }

    /// First step of a delete: check permission and hold the task for confirmation.
    pub fn request_delete(&self, task_id: &EntityId) -> BoardResult<Task> {
        self.ensure_mounted()?;
        self.require(Capability::Delete)?;

        let mut state = self.lock();
        let task = state
            .store
            .board()
            .task(task_id)
            .cloned()
            .ok_or_else(|| BoardError::task_not_found(task_id))?;
        state.pending_delete = Some(task_id.clone());
        Ok(task)
    }

    /// Drop a pending delete. Returns whether one was pending.
    pub fn cancel_delete(&self) -> bool {
        self.lock().pending_delete.take().is_some()
    }

    pub async fn confirm_delete(&self) -> BoardResult<EntityId> {
        self.ensure_mounted()?;
        let task_id = self
            .lock()
            .pending_delete
            .take()
            .ok_or_else(BoardError::no_pending_delete)?;
        self.require(Capability::Delete)?;

        self.gateway
            .delete_task(&task_id)
            .await
            .map_err(|e| self.gateway_failed("delete_task", "Failed to delete task", e))?;

        self.lock().store.remove(&task_id);
        info!("Deleted task {task_id}");
        self.notify(Notice::success("Task deleted"));
        self.refresh().await;
        Ok(task_id)
    }

    // =========================================================================
    // Comments
    // =========================================================================

    pub async fn fetch_comments(&self, task_id: &EntityId) -> BoardResult<Vec<Comment>> {
        self.ensure_mounted()?;

        let records = self
            .until_unmounted(self.gateway.list_comments(task_id))
            .await?
            .map_err(|e| self.gateway_failed("list_comments", "Failed to load comments", e))?;

        let comments: Vec<Comment> = records
            .into_iter()
            .map(|record| Comment::from_record(task_id, record))
            .collect();

        self.ensure_mounted()?;
        self.lock()
            .comments
            .insert(task_id.clone(), comments.clone());
        Ok(comments)
    }

    /// Post a comment as the actor, then reload comments and tasks.
    pub async fn add_comment(&self, task_id: &EntityId, content: &str) -> BoardResult<Vec<Comment>> {
        self.ensure_mounted()?;
        let Some(actor) = self.actor.as_ref() else {
            self.notify(Notice::error("Sign in to comment"));
            return Err(BoardError::unauthenticated());
        };
        let content = content.trim();
        if content.is_empty() {
            return Err(self.invalid(CoreError::validation("content", "must not be empty")));
        }

        let request = CreateCommentRequest {
            content: content.to_string(),
            task_id: task_id.clone(),
            teacher_id: actor.id.clone(),
        };
        self.gateway
            .create_comment(&request)
            .await
            .map_err(|e| self.gateway_failed("create_comment", "Failed to add comment", e))?;

        info!("Added comment to task {task_id}");
        self.notify(Notice::success("Comment added"));
        Ok(self.refresh_comments(task_id).await)
    }

    /// Delete one of the actor's own comments.
    pub async fn delete_comment(
        &self,
        task_id: &EntityId,
        comment_id: &EntityId,
    ) -> BoardResult<Vec<Comment>> {
        self.ensure_mounted()?;
        let Some(actor) = self.actor.as_ref() else {
            self.notify(Notice::error("Sign in to manage comments"));
            return Err(BoardError::unauthenticated());
        };

        let cached = self.lock().comments.get(task_id).cloned();
        let comments = match cached {
            Some(comments) => comments,
            None => self.fetch_comments(task_id).await?,
        };
        let comment = comments
            .iter()
            .find(|c| &c.id == comment_id)
            .ok_or_else(|| BoardError::comment_not_found(task_id, comment_id))?;

        if !comment.is_authored_by(&actor.id) {
            warn!(
                "Teacher {} tried to delete comment {comment_id} by {}",
                actor.id,
                comment.author_name()
            );
            self.notify(Notice::permission_denied(
                "You can only delete your own comments",
            ));
            return Err(BoardError::not_comment_author(comment_id));
        }

        self.gateway
            .delete_comment(comment_id)
            .await
            .map_err(|e| self.gateway_failed("delete_comment", "Failed to delete comment", e))?;

        info!("Deleted comment {comment_id} on task {task_id}");
        self.notify(Notice::success("Comment deleted"));
        Ok(self.refresh_comments(task_id).await)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, notice: Notice) {
        self.lock().notices.push(notice);
    }

    #[track_caller]
    fn ensure_mounted(&self) -> BoardResult<()> {
        if self.unmount.is_unmounted() {
            return Err(BoardError::cancelled());
        }
        Ok(())
    }

    #[track_caller]
    fn require(&self, capability: Capability) -> BoardResult<()> {
        if self.can(capability) {
            return Ok(());
        }

        let who = self
            .actor
            .as_ref()
            .map(|a| a.id.to_string())
            .unwrap_or_else(|| "anonymous".to_string());
        warn!("Denied {capability} on {} for {who}", self.menu_code);
        self.notify(Notice::permission_denied(format!(
            "You do not have {capability} permission for {}",
            self.menu_code
        )));
        Err(BoardError::permission_denied(&self.menu_code, capability))
    }

    #[track_caller]
    fn actor_id(&self) -> BoardResult<EntityId> {
        self.actor
            .as_ref()
            .map(|a| a.id.clone())
            .ok_or_else(BoardError::unauthenticated)
    }

    fn invalid(&self, source: CoreError) -> BoardError {
        let message = match &source {
            CoreError::Validation { field, message, .. } => format!("{field} {message}"),
            other => other.to_string(),
        };
        self.notify(Notice::error(message));
        BoardError::from(source)
    }

    fn gateway_failed(
        &self,
        operation: &'static str,
        summary: &str,
        source: GatewayError,
    ) -> BoardError {
        error!("{operation} failed: {source}");
        self.notify(Notice::error(format!(
            "{summary}: {}",
            source.user_message()
        )));
        BoardError::gateway(operation, source)
    }

    /// Race a gateway read against unmount.
    async fn until_unmounted<T>(
        &self,
        call: impl Future<Output = GatewayResult<T>>,
    ) -> BoardResult<GatewayResult<T>> {
        tokio::select! {
            result = call => Ok(result),
            _ = self.unmount.unmounted() => {
                debug!("Dropping gateway read after unmount");
                Err(BoardError::cancelled())
            }
        }
    }

    /// Reload tasks after a mutation that already succeeded.
    ///
    /// A failed reload has raised its own notice; the mutation still stands.
    async fn refresh(&self) {
        if let Err(e) = self.fetch_tasks().await {
            debug!("Reload after mutation failed: {e}");
        }
    }

    async fn refresh_comments(&self, task_id: &EntityId) -> Vec<Comment> {
        let comments = match self.fetch_comments(task_id).await {
            Ok(comments) => comments,
            Err(e) => {
                debug!("Comment reload for task {task_id} failed: {e}");
                self.comments(task_id)
            }
        };
        self.refresh().await;
        comments
    }
}
