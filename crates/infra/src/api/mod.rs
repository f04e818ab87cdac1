//! Square API clients
//!
//! # Architecture
//!
//! - `SquareClient` owns configuration and one shared `Transport`
//! - Resource clients (`customers`, `groups`, `segments`, `cards`) map
//!   operations onto routes and decode the typed result
//! - Token supply is injectable through `AccessTokenProvider`
//! - One round trip per operation: no retry, no caching

pub mod auth;
pub mod cards;
pub mod client;
pub mod customers;
pub mod errors;
pub mod groups;
pub mod pagination;
pub mod segments;

pub use auth::{AccessTokenProvider, StaticTokenProvider};
pub use cards::CardsClient;
pub use client::{SquareClient, SquareClientBuilder};
pub use customers::CustomersClient;
pub use errors::{ApiError, ApiErrorKind, ServerErrors};
pub use groups::GroupsClient;
pub use segments::SegmentsClient;
