//! Top-level Square client
//!
//! Owns the configuration and the shared [`Transport`]; resource clients are
//! cheap handles onto the same transport.

use std::sync::Arc;

use squarely_domain::{ClientConfig, Environment};
use tracing::debug;

use super::auth::{AccessTokenProvider, StaticTokenProvider};
use super::customers::CustomersClient;
use super::errors::ApiError;
use super::groups::GroupsClient;
use super::segments::SegmentsClient;
use crate::http::{HttpClient, Transport};

/// Client for the Square Customers, Groups and Segments APIs
#[derive(Debug, Clone)]
pub struct SquareClient {
    config: Arc<ClientConfig>,
    transport: Arc<Transport>,
}

impl SquareClient {
    /// Create a client that authenticates with the configured token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the configuration is invalid or the
    /// HTTP client cannot be created
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::builder().config(config).build()
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> SquareClientBuilder {
        SquareClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn environment(&self) -> Environment {
        self.config.environment
    }

    pub fn customers(&self) -> CustomersClient {
        CustomersClient::new(self.transport.clone())
    }

    pub fn groups(&self) -> GroupsClient {
        GroupsClient::new(self.transport.clone())
    }

    pub fn segments(&self) -> SegmentsClient {
        SegmentsClient::new(self.transport.clone())
    }
}

/// Builder for [`SquareClient`]
#[derive(Default)]
pub struct SquareClientBuilder {
    config: Option<ClientConfig>,
    token_provider: Option<Arc<dyn AccessTokenProvider>>,
    http_client: Option<HttpClient>,
}

impl SquareClientBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Supply tokens from `provider` instead of `config.access_token`
    pub fn token_provider(mut self, provider: Arc<dyn AccessTokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Use a preconfigured HTTP client. Its timeout replaces the configured one.
    pub fn http_client(mut self, client: HttpClient) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is missing or invalid
    pub fn build(self) -> Result<SquareClient, ApiError> {
        let config =
            self.config.ok_or_else(|| ApiError::Config("client config not set".to_string()))?;

        if self.token_provider.is_none() {
            config.validate_token()?;
        }
        config.validate_connection()?;

        let http = match self.http_client {
            Some(client) => client,
            None => HttpClient::builder().timeout(config.timeout()).build()?,
        };
        let auth = self
            .token_provider
            .unwrap_or_else(|| Arc::new(StaticTokenProvider::new(config.access_token.clone())));

        let transport =
            Transport::new(http, config.resolved_base_url(), config.api_version.clone(), auth)?;
        debug!(
            environment = %config.environment,
            api_root = %transport.api_root(),
            "square client created"
        );

        Ok(SquareClient { config: Arc::new(config), transport: Arc::new(transport) })
    }
}
