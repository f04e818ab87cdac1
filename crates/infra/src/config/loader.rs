//! Configuration loader
//!
//! Loads the client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the token is missing, falls back to loading from file
//! 3. Probes the working directory for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SQUARE_ACCESS_TOKEN`: Access token (required)
//! - `SQUARE_ENVIRONMENT`: `sandbox` (default) or `production`
//! - `SQUARE_API_VERSION`: Value of the `Square-Version` header
//! - `SQUARE_BASE_URL`: Overrides the environment base URL
//! - `SQUARE_TIMEOUT_SECS`: Request timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./square.toml`
//! 2. `./square.json`
//! 3. `./config.toml`
//! 4. `./config.json`

use std::path::{Path, PathBuf};

use squarely_domain::{ClientConfig, DomainError, Environment, Result};

const ENV_ACCESS_TOKEN: &str = "SQUARE_ACCESS_TOKEN";
const ENV_ENVIRONMENT: &str = "SQUARE_ENVIRONMENT";
const ENV_API_VERSION: &str = "SQUARE_API_VERSION";
const ENV_BASE_URL: &str = "SQUARE_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "SQUARE_TIMEOUT_SECS";

const CONFIG_FILE_NAMES: [&str; 4] = ["square.toml", "square.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If that fails, falls
/// back to the first config file found by [`probe_config_paths`].
///
/// # Errors
/// Returns `DomainError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing or invalid
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `SQUARE_ACCESS_TOKEN` is required; the rest fall back to defaults.
///
/// # Errors
/// Returns `DomainError::Config` if the token is missing or a variable has an
/// invalid value.
pub fn load_from_env() -> Result<ClientConfig> {
    let token = env_var(ENV_ACCESS_TOKEN)?;

    let environment = match optional_env_var(ENV_ENVIRONMENT) {
        Some(value) => value.parse::<Environment>()?,
        None => Environment::default(),
    };

    let mut config = ClientConfig::new(token, environment);

    if let Some(version) = optional_env_var(ENV_API_VERSION) {
        config = config.with_api_version(version);
    }
    if let Some(base_url) = optional_env_var(ENV_BASE_URL) {
        config = config.with_base_url(base_url);
    }
    if let Some(timeout) = optional_env_var(ENV_TIMEOUT_SECS) {
        config.timeout_secs = timeout
            .parse::<u64>()
            .map_err(|e| DomainError::Config(format!("Invalid {ENV_TIMEOUT_SECS}: {e}")))?;
    }

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the working directory for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DomainError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DomainError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DomainError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DomainError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DomainError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DomainError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(DomainError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the working directory for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    probe_in(&cwd)
}

fn probe_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(|name| dir.join(name)).find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `DomainError::Config` if the variable is not set or blank.
fn env_var(key: &str) -> Result<String> {
    optional_env_var(key).ok_or_else(|| {
        DomainError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Non-blank environment variable, trimmed.
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
