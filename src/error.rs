//! Error types for Hunter API operations.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::models::UninitializedRelationError;

/// Errors that can occur while talking to the Hunter API.
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body did not match the shape expected for the endpoint.
    #[error("unexpected {endpoint} response shape: {source}")]
    Schema {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A model relation was read before it was populated.
    #[error(transparent)]
    Uninitialized(#[from] UninitializedRelationError),

    /// DNS, connect, timeout or body read failure, as reported by reqwest.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Malformed URL while building a request.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The client could not be configured.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// `HUNTER_API_KEY` was unset or empty.
    #[error("no Hunter API key provided")]
    MissingApiKey,
}

impl Error {
    /// The status-driven API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors derived from the HTTP status of an API response.
///
/// The variant is chosen from the status code alone; `details` is whatever
/// explanation the API put in its error envelope, if any.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400: the query was malformed or cannot be satisfied.
    #[error("invalid input{}", fmt_details(.details))]
    InvalidInput { details: Option<String> },

    /// 429: the rate limit was hit. Nothing is retried.
    #[error("too many requests{}", fmt_details(.details))]
    TooManyRequests { details: Option<String> },

    /// 500: upstream fault.
    #[error("hunter server error{}", fmt_details(.details))]
    Server { details: Option<String> },

    /// Any other non-2xx status.
    #[error("hunter request failed with status {status}{}", fmt_details(.details))]
    Other {
        status: StatusCode,
        details: Option<String>,
    },
}

impl ApiError {
    /// Map a non-2xx status (and its body) to an error kind.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let details = error_details(body);
        match status {
            StatusCode::BAD_REQUEST => ApiError::InvalidInput { details },
            StatusCode::TOO_MANY_REQUESTS => ApiError::TooManyRequests { details },
            StatusCode::INTERNAL_SERVER_ERROR => ApiError::Server { details },
            status => ApiError::Other { status, details },
        }
    }

    /// HTTP status that produced this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::TooManyRequests { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Server { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Other { status, .. } => *status,
        }
    }

    pub fn details(&self) -> Option<&str> {
        match self {
            ApiError::InvalidInput { details }
            | ApiError::TooManyRequests { details }
            | ApiError::Server { details }
            | ApiError::Other { details, .. } => details.as_deref(),
        }
    }
}

fn fmt_details(details: &Option<String>) -> String {
    details
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    details: Option<String>,
}

/// First `errors[].details` from a Hunter error body. Anything else yields `None`.
fn error_details(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()?
        .errors
        .into_iter()
        .find_map(|e| e.details)
}
