use a0_management::ClientError;
use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResourceError {
    /// Remote failure, passed through unchanged
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Create succeeded but the response carried no user_id {location}")]
    MissingUserId { location: ErrorLocation },
}

impl ResourceError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ResourceError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_user_id() -> Self {
        ResourceError::MissingUserId {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ResourceError::Client(err) if err.is_not_found())
    }
}

pub type Result<T> = std::result::Result<T, ResourceError>;
