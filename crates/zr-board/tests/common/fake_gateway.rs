use zr_core::{CommentRecord, EntityId, TaskRecord, TaskStatus, Teacher, TeacherRef};
use zr_gateway::{
    CreateCommentRequest, CreateTaskRequest, GatewayError, GatewayResult, TaskGateway,
    UpdateTaskRequest,
};

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

/// One recorded gateway call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListTasks,
    CreateTask(CreateTaskRequest),
    UpdateTask(EntityId, UpdateTaskRequest),
    DeleteTask(EntityId),
    ListComments(EntityId),
    CreateComment(CreateCommentRequest),
    DeleteComment(EntityId),
    ListTeachers(u32, u32),
    GetTeacher(EntityId),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Call::CreateTask(_)
                | Call::UpdateTask(..)
                | Call::DeleteTask(_)
                | Call::CreateComment(_)
                | Call::DeleteComment(_)
        )
    }
}

/// In-memory server: applies mutations to its own records so reloads see them.
#[derive(Default)]
pub struct FakeGateway {
    calls: Mutex<Vec<Call>>,
    tasks: Mutex<Vec<TaskRecord>>,
    comments: Mutex<Vec<(EntityId, CommentRecord)>>,
    teachers: Mutex<Vec<Teacher>>,
    failing: Mutex<HashSet<&'static str>>,
    list_gate: Mutex<Option<Arc<Notify>>>,
    update_gate: Mutex<Option<Arc<Notify>>>,
    next_id: Mutex<i64>,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: Mutex::new(1000),
            ..Default::default()
        })
    }

    pub fn with_tasks(tasks: Vec<TaskRecord>) -> Arc<Self> {
        let gateway = Self::new();
        *gateway.tasks.lock().unwrap() = tasks;
        gateway
    }

    pub fn add_comment(&self, task_id: i64, record: CommentRecord) {
        self.comments
            .lock()
            .unwrap()
            .push((EntityId::from(task_id), record));
    }

    pub fn add_teacher(&self, teacher: Teacher) {
        self.teachers.lock().unwrap().push(teacher);
    }

    /// Make `operation` answer with a 500 until [`recover`](Self::recover).
    pub fn fail(&self, operation: &'static str) {
        self.failing.lock().unwrap().insert(operation);
    }

    pub fn recover(&self, operation: &'static str) {
        self.failing.lock().unwrap().remove(operation);
    }

    /// Park every `list_tasks` call until the returned handle is notified.
    pub fn hold_lists(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.list_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    /// Park every `update_task` call until the returned handle is notified.
    pub fn hold_updates(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.update_gate.lock().unwrap() = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.calls().iter().filter(|c| c.is_mutation()).count()
    }

    pub fn count(&self, wanted: fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| wanted(c)).count()
    }

    pub fn server_status(&self, task_id: i64) -> Option<String> {
        let id = EntityId::from(task_id);
        self.tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.status.clone())
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, operation: &'static str) -> GatewayResult<()> {
        if self.failing.lock().unwrap().contains(operation) {
            return Err(GatewayError::api(
                500,
                "INTERNAL".to_string(),
                format!("{operation} exploded"),
            ));
        }
        Ok(())
    }

    fn next_id(&self) -> EntityId {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        EntityId::from(*next)
    }

    async fn pass(gate: &Mutex<Option<Arc<Notify>>>) {
        let gate = gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }
}

#[async_trait]
impl TaskGateway for FakeGateway {
    async fn list_tasks(&self) -> GatewayResult<Vec<TaskRecord>> {
        self.record(Call::ListTasks);
        Self::pass(&self.list_gate).await;
        self.check("list_tasks")?;
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> GatewayResult<Option<TaskRecord>> {
        self.record(Call::CreateTask(request.clone()));
        self.check("create_task")?;

        let record: TaskRecord = serde_json::from_value(json!({
            "id": self.next_id(),
            "title": request.title,
            "description": request.description,
            "status": request.status,
            "assignedToIds": request.assigned_to_ids,
            "registeredBy": { "id": request.registered_by_id },
        }))
        .unwrap();
        self.tasks.lock().unwrap().push(record.clone());
        Ok(Some(record))
    }

    async fn update_task(
        &self,
        task_id: &EntityId,
        request: &UpdateTaskRequest,
    ) -> GatewayResult<Option<TaskRecord>> {
        self.record(Call::UpdateTask(task_id.clone(), request.clone()));
        Self::pass(&self.update_gate).await;
        self.check("update_task")?;

        let mut tasks = self.tasks.lock().unwrap();
        let Some(task) = tasks.iter_mut().find(|t| &t.id == task_id) else {
            return Err(GatewayError::api(
                404,
                "NOT_FOUND".to_string(),
                "Task not found".to_string(),
            ));
        };
        if let Some(status) = request.status {
            task.status = status.wire_value().to_string();
        }
        if let Some(ref title) = request.title {
            task.title = title.clone();
        }
        if let Some(ref description) = request.description {
            task.description = Some(description.clone());
        }
        Ok(Some(task.clone()))
    }

    async fn delete_task(&self, task_id: &EntityId) -> GatewayResult<()> {
        self.record(Call::DeleteTask(task_id.clone()));
        self.check("delete_task")?;
        self.tasks.lock().unwrap().retain(|t| &t.id != task_id);
        Ok(())
    }

    async fn list_comments(&self, task_id: &EntityId) -> GatewayResult<Vec<CommentRecord>> {
        self.record(Call::ListComments(task_id.clone()));
        self.check("list_comments")?;
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| owner == task_id)
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn create_comment(
        &self,
        request: &CreateCommentRequest,
    ) -> GatewayResult<Option<CommentRecord>> {
        self.record(Call::CreateComment(request.clone()));
        self.check("create_comment")?;

        let record = CommentRecord {
            id: self.next_id(),
            content: request.content.clone(),
            created_at: None,
            teacher: Some(TeacherRef::new(request.teacher_id.clone(), "")),
            author: None,
        };
        self.comments
            .lock()
            .unwrap()
            .push((request.task_id.clone(), record.clone()));

        let mut tasks = self.tasks.lock().unwrap();
        if let Some(task) = tasks.iter_mut().find(|t| t.id == request.task_id) {
            task.comment_count = Some(task.comment_count.unwrap_or(0) + 1);
        }
        Ok(Some(record))
    }

    async fn delete_comment(&self, comment_id: &EntityId) -> GatewayResult<()> {
        self.record(Call::DeleteComment(comment_id.clone()));
        self.check("delete_comment")?;
        self.comments
            .lock()
            .unwrap()
            .retain(|(_, record)| &record.id != comment_id);
        Ok(())
    }

    async fn list_teachers(&self, page: u32, size: u32) -> GatewayResult<Vec<Teacher>> {
        self.record(Call::ListTeachers(page, size));
        self.check("list_teachers")?;
        Ok(self
            .teachers
            .lock()
            .unwrap()
            .iter()
            .skip((page * size) as usize)
            .take(size as usize)
            .cloned()
            .collect())
    }

    async fn get_teacher(&self, teacher_id: &EntityId) -> GatewayResult<Teacher> {
        self.record(Call::GetTeacher(teacher_id.clone()));
        self.check("get_teacher")?;
        self.teachers
            .lock()
            .unwrap()
            .iter()
            .find(|t| &t.id == teacher_id)
            .cloned()
            .ok_or_else(|| {
                GatewayError::api(404, "NOT_FOUND".to_string(), "Teacher not found".to_string())
            })
    }
}

pub fn status_of(call: &Call) -> Option<TaskStatus> {
    match call {
        Call::UpdateTask(_, request) => request.status,
        _ => None,
    }
}
