use error_location::ErrorLocation;
use serde::Deserialize;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur during Management API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("User not found: {id} {location}")]
    NotFound { id: String, location: ErrorLocation },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Token exchange failed: {message} {location}")]
    Token {
        message: String,
        location: ErrorLocation,
    },
}

/// Error body returned by the Management API
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ApiErrorBody {
    status_code: Option<u16>,
    error: Option<String>,
    message: Option<String>,
    error_code: Option<String>,
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, code: String, message: String) -> Self {
        ClientError::Api {
            status,
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(id: &str) -> Self {
        ClientError::NotFound {
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn token<S: Into<String>>(message: S) -> Self {
        ClientError::Token {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Build an API error from a non-success response.
    ///
    /// Bodies that aren't the Management API error shape keep the raw text
    /// as the message.
    #[track_caller]
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();

        let code = parsed
            .error_code
            .or(parsed.error)
            .unwrap_or_else(|| String::from("UNKNOWN"));
        let message = match parsed.message {
            Some(message) => message,
            None if body.trim().is_empty() => String::from("Unknown error"),
            None => body.trim().to_string(),
        };

        ClientError::api_error(parsed.status_code.unwrap_or(status), code, message)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
