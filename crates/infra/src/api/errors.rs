//! API-specific error types
//!
//! Provides error classification for API operations. HTTP error statuses keep
//! the `errors` array the server sent so callers can inspect codes and fields.

use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::{Map, Value};
use squarely_domain::{ApiErrorDetail, ErrorBody, ErrorCode};
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Connection failures and timeouts
    Network,
    /// 401, 403
    Authentication,
    /// 404
    NotFound,
    /// 400, 422, and malformed input or responses
    Validation,
    /// 409
    Conflict,
    /// 429
    RateLimited,
    /// 5xx
    Server,
    /// Any other non-success status
    Client,
    /// Invalid client configuration
    Config,
}

/// HTTP status plus the error entries from the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerErrors {
    pub status: u16,
    pub errors: Vec<ApiErrorDetail>,
}

impl ServerErrors {
    pub fn new(status: u16, errors: Vec<ApiErrorDetail>) -> Self {
        Self { status, errors }
    }

    pub fn first(&self) -> Option<&ApiErrorDetail> {
        self.errors.first()
    }

    /// Whether any entry carries `code`.
    pub fn has_code(&self, code: &ErrorCode) -> bool {
        self.errors.iter().any(|detail| detail.code.as_ref() == Some(code))
    }
}

impl fmt::Display for ServerErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(first) = self.first() {
            write!(f, ": {first}")?;
        }
        if self.errors.len() > 1 {
            write!(f, " (+{} more)", self.errors.len() - 1)?;
        }
        Ok(())
    }
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Authentication failed: {0}")]
    Authentication(ServerErrors),

    #[error("Not found: {0}")]
    NotFound(ServerErrors),

    #[error("Validation failed: {0}")]
    Validation(ServerErrors),

    #[error("Conflict: {0}")]
    Conflict(ServerErrors),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(ServerErrors),

    #[error("Server error: {0}")]
    Server(ServerErrors),

    #[error("Client error: {0}")]
    Client(ServerErrors),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Classify a non-success response.
    ///
    /// The `errors` array is read leniently: a body without one still maps by
    /// status, with no details.
    pub fn from_response(status: StatusCode, body: &Map<String, Value>) -> Self {
        let errors = serde_json::from_value::<ErrorBody>(Value::Object(body.clone()))
            .map(|parsed| parsed.errors)
            .unwrap_or_default();
        let server = ServerErrors::new(status.as_u16(), errors);

        match status.as_u16() {
            401 | 403 => Self::Authentication(server),
            404 => Self::NotFound(server),
            400 | 422 => Self::Validation(server),
            409 => Self::Conflict(server),
            429 => Self::RateLimited(server),
            500..=599 => Self::Server(server),
            _ => Self::Client(server),
        }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Network(_) | Self::Timeout(_) => ApiErrorKind::Network,
            Self::Authentication(_) => ApiErrorKind::Authentication,
            Self::NotFound(_) => ApiErrorKind::NotFound,
            Self::Validation(_) | Self::InvalidResponse(_) | Self::InvalidArgument(_) => {
                ApiErrorKind::Validation
            }
            Self::Conflict(_) => ApiErrorKind::Conflict,
            Self::RateLimited(_) => ApiErrorKind::RateLimited,
            Self::Server(_) => ApiErrorKind::Server,
            Self::Client(_) => ApiErrorKind::Client,
            Self::Config(_) => ApiErrorKind::Config,
        }
    }

    /// Whether a caller could reasonably retry the operation.
    ///
    /// Advisory only; the client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            ApiErrorKind::Network | ApiErrorKind::RateLimited | ApiErrorKind::Server
        )
    }

    /// Server error entries, for errors produced by an HTTP status.
    pub fn server_errors(&self) -> Option<&ServerErrors> {
        match self {
            Self::Authentication(errors)
            | Self::NotFound(errors)
            | Self::Validation(errors)
            | Self::Conflict(errors)
            | Self::RateLimited(errors)
            | Self::Server(errors)
            | Self::Client(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.server_errors().map(|errors| errors.status)
    }
}
