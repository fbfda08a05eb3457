use zr_core::{Capability, CoreError, EntityId};
use zr_gateway::GatewayError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Permission denied: {capability} on {menu_code} {location}")]
    PermissionDenied {
        menu_code: String,
        capability: Capability,
        location: ErrorLocation,
    },

    #[error("No signed-in teacher {location}")]
    Unauthenticated { location: ErrorLocation },

    #[error("Comment {comment_id} belongs to another teacher {location}")]
    NotCommentAuthor {
        comment_id: EntityId,
        location: ErrorLocation,
    },

    #[error("Validation failed: {source}")]
    Validation {
        #[source]
        source: CoreError,
    },

    #[error("Task {task_id} is not on the board {location}")]
    TaskNotFound {
        task_id: EntityId,
        location: ErrorLocation,
    },

    #[error("Comment {comment_id} not loaded for task {task_id} {location}")]
    CommentNotFound {
        task_id: EntityId,
        comment_id: EntityId,
        location: ErrorLocation,
    },

    #[error("Task {task_id} has a status update in flight {location}")]
    TaskBusy {
        task_id: EntityId,
        location: ErrorLocation,
    },

    #[error("No delete awaiting confirmation {location}")]
    NoPendingDelete { location: ErrorLocation },

    #[error("Board was unmounted {location}")]
    Cancelled { location: ErrorLocation },

    #[error("Gateway call {operation} failed: {source}")]
    Gateway {
        operation: &'static str,
        #[source]
        source: GatewayError,
    },
}

impl BoardError {
    #[track_caller]
    pub fn permission_denied(menu_code: &str, capability: Capability) -> Self {
        BoardError::PermissionDenied {
            menu_code: menu_code.to_string(),
            capability,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthenticated() -> Self {
        BoardError::Unauthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_comment_author(comment_id: &EntityId) -> Self {
        BoardError::NotCommentAuthor {
            comment_id: comment_id.clone(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn task_not_found(task_id: &EntityId) -> Self {
        BoardError::TaskNotFound {
            task_id: task_id.clone(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn comment_not_found(task_id: &EntityId, comment_id: &EntityId) -> Self {
        BoardError::CommentNotFound {
            task_id: task_id.clone(),
            comment_id: comment_id.clone(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn task_busy(task_id: &EntityId) -> Self {
        BoardError::TaskBusy {
            task_id: task_id.clone(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_pending_delete() -> Self {
        BoardError::NoPendingDelete {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        BoardError::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn gateway(operation: &'static str, source: GatewayError) -> Self {
        BoardError::Gateway { operation, source }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}

impl From<CoreError> for BoardError {
    fn from(source: CoreError) -> Self {
        BoardError::Validation { source }
    }
}

pub type BoardResult<T> = std::result::Result<T, BoardError>;
