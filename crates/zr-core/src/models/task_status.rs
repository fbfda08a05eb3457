use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Board lane a task sits in.
///
/// Two spellings exist: the wire value the gateway speaks (`todo`,
/// `inprogress`, `done`) and the column key the board is keyed by (`todo`,
/// `inProgress`, `done`). Serde uses the wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "inprogress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    /// Columns in display order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn wire_value(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    pub fn column_key(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Parse a raw status from the gateway. Case-insensitive.
    #[track_caller]
    pub fn from_wire(value: &str) -> CoreResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(CoreError::InvalidTaskStatus {
                value: value.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    #[track_caller]
    pub fn from_column_key(key: &str) -> CoreResult<Self> {
        match key {
            "todo" => Ok(Self::Todo),
            "inProgress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(CoreError::InvalidColumnKey {
                value: key.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::from_wire(s)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_value())
    }
}
