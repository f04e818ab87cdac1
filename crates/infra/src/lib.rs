//! # Squarely Infrastructure
//!
//! Network and environment code for the Squarely client.
//!
//! This crate contains:
//! - HTTP client, routes and the shared transport
//! - Resource clients for customers, groups, segments and cards
//! - The top-level `SquareClient`
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Depends on `squarely-domain` for all data types
//! - Contains all "impure" code (network I/O, environment access)
//!
//! ## Example
//!
//! ```no_run
//! use squarely_domain::{ClientConfig, CustomerFields, Environment};
//! use squarely_infra::SquareClient;
//!
//! # async fn run() -> Result<(), squarely_infra::ApiError> {
//! let client = SquareClient::new(ClientConfig::new("EAAA...", Environment::Sandbox))?;
//! let customer = client.customers().create(CustomerFields::new().given_name("Jane")).await?;
//! println!("created {}", customer.id);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod logging;

// Re-export commonly used items
pub use api::{
    AccessTokenProvider, ApiError, ApiErrorKind, CardsClient, CustomersClient, GroupsClient,
    SegmentsClient, ServerErrors, SquareClient, SquareClientBuilder, StaticTokenProvider,
};
pub use http::{HttpClient, Route, Transport, TransportResponse};
