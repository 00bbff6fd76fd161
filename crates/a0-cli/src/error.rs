use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] a0_config::ConfigError),

    #[error(transparent)]
    Resource(#[from] a0_provider::ResourceError),

    #[error("State file {path}: {message} {location}")]
    StateFile {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown resource type: {name} {location}")]
    UnknownResourceType {
        name: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    #[track_caller]
    pub fn state_file<S: Into<String>>(path: PathBuf, message: S) -> Self {
        CliError::StateFile {
            path,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl CliError {
    #[track_caller]
    pub fn unknown_resource_type<S: Into<String>>(name: S) -> Self {
        CliError::UnknownResourceType {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CliError>;
