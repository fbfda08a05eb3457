use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    /// Shown as a blocking dialog rather than a toast
    PermissionDenied,
}

/// One user-visible message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn permission_denied<S: Into<String>>(message: S) -> Self {
        Self {
            kind: NoticeKind::PermissionDenied,
            message: message.into(),
        }
    }
}

/// Bounded queue of notices; the oldest is dropped when full.
#[derive(Debug)]
pub struct NoticeLog {
    capacity: usize,
    entries: VecDeque<Notice>,
}

impl NoticeLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notice);
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        self.entries.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
