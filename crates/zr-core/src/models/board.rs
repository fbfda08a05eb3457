use crate::{EntityId, Task, TaskRecord, TaskStatus};

use log::debug;
use serde::Serialize;

/// One lane of the board, in display order.
pub type Column = Vec<Task>;

/// The three-lane task board.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub todo: Column,
    pub in_progress: Column,
    pub done: Column,
}

impl Board {
    /// Distribute tasks into lanes by status, keeping their relative order.
    pub fn from_tasks<I: IntoIterator<Item = Task>>(tasks: I) -> Self {
        let mut board = Board::default();
        for task in tasks {
            board.column_mut(task.status).push(task);
        }
        board
    }

    /// Build the board from raw gateway records.
    ///
    /// Records with an unrecognized status are dropped silently.
    pub fn from_records<I: IntoIterator<Item = TaskRecord>>(records: I) -> Self {
        Self::from_tasks(records.into_iter().filter_map(|record| {
            let id = record.id.clone();
            match Task::try_from_record(record) {
                Ok(task) => Some(task),
                Err(e) => {
                    debug!("Dropping task {id} from board: {e}");
                    None
                }
            }
        }))
    }

    pub fn column(&self, status: TaskStatus) -> &Column {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    pub fn column_mut(&mut self, status: TaskStatus) -> &mut Column {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Lane and index of a task.
    pub fn locate(&self, task_id: &EntityId) -> Option<(TaskStatus, usize)> {
        TaskStatus::ALL.into_iter().find_map(|status| {
            self.column(status)
                .iter()
                .position(|t| &t.id == task_id)
                .map(|index| (status, index))
        })
    }

    pub fn task(&self, task_id: &EntityId) -> Option<&Task> {
        self.locate(task_id)
            .map(|(status, index)| &self.column(status)[index])
    }

    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Project the board onto tasks assigned to `teacher_id`.
    ///
    /// Pure: returns a new board, `self` is untouched.
    pub fn filter_by_assignee(&self, teacher_id: &EntityId) -> Board {
        let keep = |column: &Column| -> Column {
            column
                .iter()
                .filter(|t| t.is_assigned_to(teacher_id))
                .cloned()
                .collect()
        };
        Board {
            todo: keep(&self.todo),
            in_progress: keep(&self.in_progress),
            done: keep(&self.done),
        }
    }

    /// Apply an optional assignee filter; `None` yields the full board.
    pub fn view(&self, assignee: Option<&EntityId>) -> Board {
        match assignee {
            Some(id) => self.filter_by_assignee(id),
            None => self.clone(),
        }
    }
}
