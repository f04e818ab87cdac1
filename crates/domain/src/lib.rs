//! # Squarely Domain
//!
//! Business domain types and models for the Squarely client.
//!
//! This crate contains:
//! - Customer, group, segment and card data types
//! - Search filters and pagination
//! - Domain error types and the Square error payload
//! - Client configuration structures
//! - API constants
//!
//! ## Architecture
//! - No dependencies on other Squarely crates
//! - No I/O; everything here is plain data

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
