use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid task status: {value} {location}")]
    InvalidTaskStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid column key: {value} {location}")]
    InvalidColumnKey {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        CoreError::Validation {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
