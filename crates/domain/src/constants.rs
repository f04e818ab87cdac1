//! Application constants
//!
//! Centralized location for the wire-level constants shared by the domain
//! and infrastructure crates.

// Environments
pub const PRODUCTION_BASE_URL: &str = "https://connect.squareup.com";
pub const SANDBOX_BASE_URL: &str = "https://connect.squareupsandbox.com";

/// Path prefix shared by every v2 endpoint.
pub const API_PATH_PREFIX: &str = "v2/";

// Versioning
pub const DEFAULT_API_VERSION: &str = "2024-01-18";
pub const API_VERSION_HEADER: &str = "Square-Version";

// Transport
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Pagination
pub const MIN_SEARCH_LIMIT: u32 = 1;
pub const MAX_SEARCH_LIMIT: u32 = 100;
