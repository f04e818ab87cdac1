//! Client configuration structures
//!
//! Configuration is an explicit value handed to the client constructor. No
//! part of the library reads ambient state after construction.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECS, PRODUCTION_BASE_URL, SANDBOX_BASE_URL,
};
use crate::errors::{DomainError, Result};

/// Target Square environment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Sandbox,
}

impl Environment {
    /// Base URL of the environment, without the `/v2` prefix.
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Sandbox => f.write_str("sandbox"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            other => Err(DomainError::Config(format!(
                "Invalid environment '{other}': expected 'production' or 'sandbox'"
            ))),
        }
    }
}

/// Access token that never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretToken(String);

impl SecretToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value, for building the `Authorization` header only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretToken(***)")
    }
}

impl From<&str> for SecretToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SecretToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Configuration consumed by the top-level client constructor
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Access token. Do not prefix it with `Bearer`.
    pub access_token: SecretToken,
    #[serde(default)]
    pub environment: Environment,
    /// Value sent in the `Square-Version` header.
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Overrides the environment base URL (proxies, mock servers).
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl ClientConfig {
    pub fn new(access_token: impl Into<SecretToken>, environment: Environment) -> Self {
        Self {
            access_token: access_token.into(),
            environment,
            api_version: default_api_version(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Request timeout, rounded up to whole seconds. A zero duration is
    /// kept and rejected by [`ClientConfig::validate`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL requests are issued against: the override if present,
    /// otherwise the environment's URL.
    pub fn resolved_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_else(|| self.environment.base_url())
    }

    /// Check the fields that would otherwise only fail at request time.
    ///
    /// # Errors
    /// Returns `DomainError::Config` for an empty token, API version or
    /// base URL, or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        self.validate_token()?;
        self.validate_connection()
    }

    /// # Errors
    /// Returns `DomainError::Config` for a blank access token.
    pub fn validate_token(&self) -> Result<()> {
        if self.access_token.is_empty() {
            return Err(DomainError::Config("access token must not be empty".into()));
        }
        Ok(())
    }

    /// Everything [`ClientConfig::validate`] checks except the token, for
    /// clients whose tokens come from elsewhere.
    ///
    /// # Errors
    /// Returns `DomainError::Config` for an empty API version or base URL,
    /// or a zero timeout.
    pub fn validate_connection(&self) -> Result<()> {
        if self.api_version.trim().is_empty() {
            return Err(DomainError::Config("API version must not be empty".into()));
        }
        if self.base_url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            return Err(DomainError::Config("base URL override must not be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(DomainError::Config("timeout must be at least one second".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_selects_base_url() {
        assert_eq!(Environment::Production.base_url(), "https://connect.squareup.com");
        assert_eq!(Environment::Sandbox.base_url(), "https://connect.squareupsandbox.com");
    }

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!("PRODUCTION".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" sandbox ".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert!(matches!("staging".parse::<Environment>(), Err(DomainError::Config(_))));
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = ClientConfig::new("EAAA-secret-token", Environment::Sandbox);
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("EAAA-secret-token"));
        assert!(rendered.contains("SecretToken(***)"));
    }

    #[test]
    fn base_url_override_wins() {
        let config = ClientConfig::new("token", Environment::Production)
            .with_base_url("http://127.0.0.1:9999");
        assert_eq!(config.resolved_base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn validate_rejects_empty_token() {
        let config = ClientConfig::new("  ", Environment::Sandbox);
        assert!(matches!(config.validate(), Err(DomainError::Config(_))));
    }

    #[test]
    fn sub_second_timeout_rounds_up() {
        let config = ClientConfig::new("token", Environment::Sandbox);
        assert_eq!(
            config.clone().with_timeout(Duration::from_millis(250)).timeout(),
            Duration::from_secs(1)
        );
        assert_eq!(
            config.clone().with_timeout(Duration::from_millis(1500)).timeout(),
            Duration::from_secs(2)
        );
        assert_eq!(config.with_timeout(Duration::from_secs(5)).timeout(), Duration::from_secs(5));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config =
            ClientConfig::new("token", Environment::Sandbox).with_timeout(Duration::ZERO);
        assert!(matches!(config.validate(), Err(DomainError::Config(_))));
    }

    #[test]
    fn connection_checks_ignore_token() {
        let config = ClientConfig::new("", Environment::Sandbox);
        assert!(config.validate_connection().is_ok());
        assert!(matches!(config.validate_token(), Err(DomainError::Config(_))));

        let config = config.with_api_version(" ");
        assert!(matches!(config.validate_connection(), Err(DomainError::Config(_))));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.validate().is_ok());
    }
}
