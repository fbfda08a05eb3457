use zr_core::{Board, Comment, ContentSegment, Task, TaskStatus, Teacher, link_segments};

use std::fmt::Write;

use serde::Serialize;

/// What a command produced, ready for text or JSON output.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    Board(Board),
    Comments(Vec<Comment>),
    Teachers(Vec<Teacher>),
    Message { message: String },
}

impl Output {
    pub fn message<S: Into<String>>(message: S) -> Self {
        Output::Message {
            message: message.into(),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Output::Board(board) => board_text(board),
            Output::Comments(comments) => comments_text(comments),
            Output::Teachers(teachers) => teachers_text(teachers),
            Output::Message { message } => message.clone(),
        }
    }
}

fn column_title(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "TODO",
        TaskStatus::InProgress => "IN PROGRESS",
        TaskStatus::Done => "DONE",
    }
}

pub fn board_text(board: &Board) -> String {
    let mut out = String::new();
    for status in TaskStatus::ALL {
        let column = board.column(status);
        let _ = writeln!(out, "{} ({})", column_title(status), column.len());
        for task in column {
            let _ = writeln!(out, "  {}", task_line(task));
        }
    }
    out.trim_end().to_string()
}

pub fn task_line(task: &Task) -> String {
    let mut line = format!("#{} {}", task.id, task.title);

    let assignees = task.assignee_display();
    if !assignees.is_empty() {
        let _ = write!(line, " [{assignees}]");
    }

    match (task.start_date, task.end_date) {
        (Some(start), Some(end)) => {
            let _ = write!(line, " {start}..{end}");
        }
        (Some(start), None) => {
            let _ = write!(line, " from {start}");
        }
        (None, Some(end)) => {
            let _ = write!(line, " until {end}");
        }
        (None, None) => {}
    }

    if task.comment_count > 0 {
        let _ = write!(line, " ({} comments)", task.comment_count);
    }
    line
}

/// Links are wrapped in angle brackets so terminals pick them up whole.
pub fn content_text(content: &str) -> String {
    link_segments(content)
        .into_iter()
        .map(|segment| match segment {
            ContentSegment::Text(text) => text.to_string(),
            ContentSegment::Link(url) => format!("<{url}>"),
        })
        .collect()
}

pub fn comments_text(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return "No comments".to_string();
    }

    comments
        .iter()
        .map(|c| {
            let when = c
                .created_at
                .map(|t| t.format(" %Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            format!(
                "#{} {}{}: {}",
                c.id,
                c.author_name(),
                when,
                content_text(&c.content)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn teachers_text(teachers: &[Teacher]) -> String {
    if teachers.is_empty() {
        return "No teachers".to_string();
    }

    teachers
        .iter()
        .map(|t| match t.role.as_deref() {
            Some(role) => format!("#{} {} ({role})", t.id, t.name),
            None => format!("#{} {}", t.id, t.name),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
