use zr_board::BoardError;
use zr_config::ConfigError;
use zr_gateway::GatewayError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("{source}")]
    Gateway {
        #[from]
        source: GatewayError,
    },

    #[error("{source}")]
    Board {
        #[from]
        source: BoardError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message}")]
    Usage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source}")]
    Output {
        #[from]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        CliError::Usage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
