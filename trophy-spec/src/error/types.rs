//! Core error types.
//!
//! `TrophyError` is the single error returned by every client call. Non-2xx
//! responses keep the status, the raw body and a summary of the request that
//! produced them so failures can be diagnosed without re-running the call.

use std::fmt;
use thiserror::Error;

/// Summary of an outgoing request, attached to API errors.
///
/// The `X-API-KEY` header value is masked before it is stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestInfo {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl fmt::Display for RequestInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// Structural validation failure for a record payload.
///
/// Only produced by an explicit `Record::validate` call; regular decoding is
/// lenient and never returns it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The payload is not a JSON object.
    #[error("{record}: expected a JSON object, found {found}")]
    NotAnObject { record: &'static str, found: String },

    /// A required wire key is absent or `null`.
    #[error("{record}: missing required field `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    /// A field is present but has the wrong JSON type.
    #[error("{record}: {message}")]
    TypeMismatch {
        record: &'static str,
        message: String,
    },
}

impl ValidationError {
    /// Name of the record the payload was validated against.
    pub fn record(&self) -> &'static str {
        match self {
            Self::NotAnObject { record, .. }
            | Self::MissingField { record, .. }
            | Self::TypeMismatch { record, .. } => record,
        }
    }
}

/// Errors returned by Trophy client operations.
#[derive(Debug, Clone, Error)]
pub enum TrophyError {
    /// The request never produced an HTTP response (DNS, connect, TLS, reset).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The request exceeded its timeout.
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// The server answered with a non-2xx status.
    #[error("API error {status} for {request}: {body}")]
    ApiError {
        status: u16,
        body: String,
        request: Box<RequestInfo>,
    },

    /// Malformed JSON, either in a response body or while encoding a request.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Well-formed JSON whose values do not fit the expected record.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The client or the call is configured in a way that cannot be sent.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Explicit structural validation failed.
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),
}

impl TrophyError {
    /// Build an API error from a response status, body and request summary.
    pub fn api_error(status: u16, body: impl Into<String>, request: RequestInfo) -> Self {
        Self::ApiError {
            status,
            body: body.into(),
            request: Box::new(request),
        }
    }

    /// HTTP status code, when the error came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The request that produced an API error.
    pub fn request(&self) -> Option<&RequestInfo> {
        match self {
            Self::ApiError { request, .. } => Some(request),
            _ => None,
        }
    }

    /// The `{"error": "..."}` body the API sends with most failures.
    ///
    /// `None` for other variants and for bodies that are not that shape.
    pub fn error_body(&self) -> Option<crate::types::ErrorBody> {
        use crate::types::{ErrorBody, Record};
        match self {
            Self::ApiError { body, .. } => ErrorBody::decode(body.as_bytes())
                .ok()
                .filter(|decoded| !decoded.error.is_empty()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Whether the transport may retry the call that produced this error.
    ///
    /// Connection failures, timeouts, 408, 429 and any 5xx are transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(_) | Self::TimeoutError(_) => true,
            Self::ApiError { status, .. } => {
                matches!(status, 408 | 429) || (500..=599).contains(status)
            }
            _ => false,
        }
    }
}
