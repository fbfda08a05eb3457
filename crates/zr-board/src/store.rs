use zr_core::{Board, EntityId, Task, TaskStatus};

/// Where a task sat before a mutation, for putting it back.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub task: Task,
    pub status: TaskStatus,
    pub index: usize,
}

/// Holds the board the view renders.
///
/// No validation happens here; the controller decides what is allowed.
#[derive(Debug, Default)]
pub struct BoardStore {
    board: Board,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn replace(&mut self, board: Board) {
        self.board = board;
    }

    /// Append to the end of the task's status column.
    pub fn add(&mut self, task: Task) {
        self.board.column_mut(task.status).push(task);
    }

    /// Swap in a new version of a task. A status change moves it to the end
    /// of the new column. Returns false if the task is not on the board.
    pub fn update(&mut self, task: Task) -> bool {
        let Some((status, index)) = self.board.locate(&task.id) else {
            return false;
        };

        if status == task.status {
            self.board.column_mut(status)[index] = task;
        } else {
            self.board.column_mut(status).remove(index);
            self.add(task);
        }
        true
    }

    pub fn remove(&mut self, task_id: &EntityId) -> Option<Placement> {
        let (status, index) = self.board.locate(task_id)?;
        let task = self.board.column_mut(status).remove(index);
        Some(Placement {
            task,
            status,
            index,
        })
    }

    /// Move a task within its own column. Out-of-range targets clamp to the end.
    pub fn reorder(&mut self, status: TaskStatus, from: usize, to: usize) -> bool {
        let column = self.board.column_mut(status);
        if from >= column.len() {
            return false;
        }
        let task = column.remove(from);
        let to = to.min(column.len());
        column.insert(to, task);
        true
    }

    /// Translate a drop position in the rendered column into a store index.
    ///
    /// `view_index` counts only tasks visible under `assignee`, with the
    /// dragged task already lifted out. The result is an index into the
    /// store column with that task removed, ready for `reorder` or
    /// `move_task`. Past the last visible task means right after it.
    pub fn drop_index(
        &self,
        task_id: &EntityId,
        status: TaskStatus,
        view_index: usize,
        assignee: Option<&EntityId>,
    ) -> usize {
        let visible = |task: &Task| assignee.is_none_or(|id| task.is_assigned_to(id));
        let column: Vec<&Task> = self
            .board
            .column(status)
            .iter()
            .filter(|t| &t.id != task_id)
            .collect();

        let anchor = column
            .iter()
            .enumerate()
            .filter(|(_, task)| visible(task))
            .nth(view_index);
        match anchor {
            Some((index, _)) => index,
            None => column
                .iter()
                .rposition(|task| visible(task))
                .map_or(column.len(), |last| last + 1),
        }
    }

    /// Splice a task into `status` at `index`, rewriting its status.
    ///
    /// Returns where it was, so the caller can roll back.
    pub fn move_task(
        &mut self,
        task_id: &EntityId,
        status: TaskStatus,
        index: usize,
    ) -> Option<Placement> {
        let previous = self.remove(task_id)?;

        let mut moved = previous.task.clone();
        moved.status = status;
        let column = self.board.column_mut(status);
        let index = index.min(column.len());
        column.insert(index, moved);

        Some(previous)
    }

    /// Put a task back where a placement says it was.
    ///
    /// Only this task is touched, so other moves made in the meantime survive.
    pub fn restore(&mut self, placement: Placement) {
        self.remove(&placement.task.id);
        let column = self.board.column_mut(placement.status);
        let index = placement.index.min(column.len());
        column.insert(index, placement.task);
    }
}
