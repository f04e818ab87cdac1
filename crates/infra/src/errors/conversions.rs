//! Conversions from external infrastructure errors into [`ApiError`].

use std::time::Duration;

use reqwest::Error as HttpError;
use squarely_domain::DomainError;

use crate::api::errors::ApiError;

/// Conversion for errors whose mapping needs request context.
pub trait IntoApiError {
    /// `timeout` is the configured request timeout, reported back when the
    /// request timed out.
    fn into_api_error(self, timeout: Duration) -> ApiError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ApiError */
/* -------------------------------------------------------------------------- */

impl IntoApiError for HttpError {
    fn into_api_error(self, timeout: Duration) -> ApiError {
        if self.is_timeout() {
            return ApiError::Timeout(timeout);
        }

        if self.is_builder() {
            return ApiError::Config(format!("invalid HTTP request: {self}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return ApiError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return ApiError::InvalidResponse(format!("failed to read response body: {self}"));
        }

        ApiError::Network(self.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ApiError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(format!("unexpected response shape: {err}"))
    }
}

/* -------------------------------------------------------------------------- */
/* DomainError → ApiError */
/* -------------------------------------------------------------------------- */

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Config(message) => Self::Config(message),
            DomainError::InvalidInput(message) => Self::InvalidArgument(message),
            DomainError::InvalidData(message) => Self::InvalidResponse(message),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
