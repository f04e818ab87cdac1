//! Structured logging helpers
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! application's job.

use reqwest::Method;
use tracing::warn;

use crate::api::errors::ApiError;
use crate::http::Route;

/// Convert an `ApiError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &ApiError) -> &'static str {
    match error {
        ApiError::Network(_) => "network",
        ApiError::Timeout(_) => "timeout",
        ApiError::Authentication(_) => "authentication",
        ApiError::NotFound(_) => "not_found",
        ApiError::Validation(_) => "validation",
        ApiError::Conflict(_) => "conflict",
        ApiError::RateLimited(_) => "rate_limited",
        ApiError::Server(_) => "server",
        ApiError::Client(_) => "client",
        ApiError::InvalidResponse(_) => "invalid_response",
        ApiError::InvalidArgument(_) => "invalid_argument",
        ApiError::Config(_) => "config",
    }
}

/// Log a request that produced no usable response.
///
/// Only the method and route are logged; routes never contain credentials.
#[inline]
pub fn log_request_failure(method: &Method, route: &Route, error: &ApiError) {
    warn!(%method, route = %route, error_type = error_label(error), error = %error, "request failed");
}
