use std::fmt;
use std::io;

use reqwest::StatusCode;
use serde_json::Error as JsonError;

#[derive(Debug)]
pub enum OpenApiError {
    MissingApiKey,
    MissingAppId,
    InvalidProxy(String),
    InvalidHeader(String),
    InvalidPayloadType(&'static str),
    MissingMiniAppId,
    Request(reqwest::Error),
    Status(StatusCode, String),
    Io(io::Error),
    Serde(JsonError),
}

impl fmt::Display for OpenApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "api key is required"),
            Self::MissingAppId => write!(f, "zalo app id is required"),
            Self::InvalidProxy(message) => write!(f, "invalid proxy configuration: {message}"),
            Self::InvalidHeader(message) => write!(f, "invalid header value: {message}"),
            Self::InvalidPayloadType(type_name) => {
                write!(f, "payload must be a JSON object, got {type_name}")
            }
            Self::MissingMiniAppId => {
                write!(f, "payload is missing a 'miniAppId' value for the request path")
            }
            Self::Request(error) => write!(f, "request error: {error}"),
            Self::Status(status, body) => write!(f, "HTTP {status} {body}"),
            Self::Io(error) => write!(f, "deploy file read failed: {error}"),
            Self::Serde(error) => write!(f, "serialization error: {error}"),
        }
    }
}

impl std::error::Error for OpenApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(error) => Some(error),
            Self::Io(error) => Some(error),
            Self::Serde(error) => Some(error),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OpenApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error)
    }
}

impl From<io::Error> for OpenApiError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<JsonError> for OpenApiError {
    fn from(error: JsonError) -> Self {
        Self::Serde(error)
    }
}

impl OpenApiError {
    /// HTTP status carried by a transport failure, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(status, _) => Some(*status),
            Self::Request(error) => error.status(),
            _ => None,
        }
    }
}
