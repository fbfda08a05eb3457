use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during gateway calls
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error {status}: {message} (code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid server URL {url}: {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },
}

impl GatewayError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        GatewayError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        GatewayError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn api(status: u16, code: String, message: String) -> Self {
        GatewayError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(url: &str, message: impl Into<String>) -> Self {
        GatewayError::InvalidUrl {
            url: url.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Transport hiccups, throttling and 5xx are worth another try
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { source, .. } => source.is_timeout() || source.is_connect(),
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::Json { .. } | Self::InvalidUrl { .. } => false,
        }
    }

    /// Short, user-facing description without source locations
    pub fn user_message(&self) -> String {
        match self {
            Self::Http { .. } => "Could not reach the server".to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Json { .. } => "Unexpected response from the server".to_string(),
            Self::InvalidUrl { .. } => "The server address is not valid".to_string(),
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        GatewayError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for GatewayError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        GatewayError::from_json(err)
    }
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;
