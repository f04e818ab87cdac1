//! HTTP plumbing: client, routes and the shared transport.

pub mod client;
pub mod route;
pub mod transport;

pub use client::{HttpClient, HttpClientBuilder, DEFAULT_USER_AGENT};
pub use route::Route;
pub use transport::{json_body, Transport, TransportResponse};
