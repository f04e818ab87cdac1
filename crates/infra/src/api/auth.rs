//! Access token supply
//!
//! The transport asks an [`AccessTokenProvider`] for a token on every request,
//! so providers that rotate tokens take effect without rebuilding the client.

use async_trait::async_trait;
use squarely_domain::SecretToken;

use super::errors::ApiError;

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token
    async fn access_token(&self) -> Result<SecretToken, ApiError>;
}

/// Provider that always returns the token it was built with.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: SecretToken,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<SecretToken>) -> Self {
        Self { token: token.into() }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<SecretToken, ApiError> {
        if self.token.is_empty() {
            return Err(ApiError::Config("access token is empty".into()));
        }
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_returns_token() {
        let provider = StaticTokenProvider::new("EAAA-token");
        let token = provider.access_token().await.unwrap();
        assert_eq!(token.expose(), "EAAA-token");
    }

    #[tokio::test]
    async fn static_provider_rejects_blank_token() {
        let provider = StaticTokenProvider::new("   ");
        assert!(matches!(provider.access_token().await, Err(ApiError::Config(_))));
    }
}
