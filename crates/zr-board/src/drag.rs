use zr_core::{CoreResult, EntityId, TaskStatus};

/// A column and slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragLocation {
    pub status: TaskStatus,
    pub index: usize,
}

impl DragLocation {
    pub fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }

    /// Build from a view column key such as `"inProgress"`.
    pub fn from_column_key(key: &str, index: usize) -> CoreResult<Self> {
        Ok(Self::new(TaskStatus::from_column_key(key)?, index))
    }
}

/// Drag-end event as reported by the view.
///
/// `destination` is `None` when the card was dropped outside any column.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEnd {
    pub task_id: EntityId,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragEnd {
    pub fn new<I: Into<EntityId>>(task_id: I, source: DragLocation) -> Self {
        Self {
            task_id: task_id.into(),
            source,
            destination: None,
        }
    }

    pub fn to(mut self, destination: DragLocation) -> Self {
        self.destination = Some(destination);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dropped outside a column or back on its own slot
    Unchanged,
    /// Same column; only the local order changed
    Reordered,
    Moved { from: TaskStatus, to: TaskStatus },
}
