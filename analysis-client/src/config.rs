/// Configuration for the ClickSafe submission client
///
/// Centralized configuration management with support for:
/// - Environment variable loading (plus an optional `.env` file)
/// - Default values
/// - Configuration validation
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Default analysis-service base URL used in development when no
/// override is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Main configuration structure for the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            api: ApiConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Analysis-service API configuration
///
/// `base_url`, `origin` and `dev_build` are read once at startup and
/// treated as immutable inputs to endpoint resolution afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute base URL of the analysis service, used in development
    /// mode where the client and service run as separate processes.
    pub base_url: String,
    /// Origin the presentation layer is served from. Empty for a plain
    /// CLI run, which resolves to production (same-origin) mode unless
    /// `dev_build` is set.
    pub origin: String,
    /// Forces development-mode endpoint resolution regardless of origin.
    pub dev_build: bool,
    pub request_timeout_seconds: u64,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: env::var("CLICKSAFE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            origin: env::var("CLICKSAFE_ORIGIN").unwrap_or_default(),
            dev_build: env::var("CLICKSAFE_DEV_BUILD")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            request_timeout_seconds: env::var("CLICKSAFE_REQUEST_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("Invalid CLICKSAFE_REQUEST_TIMEOUT")?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            anyhow::bail!("API base URL cannot be empty");
        }
        if self.request_timeout_seconds == 0 {
            anyhow::bail!("Request timeout must be greater than 0");
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            origin: String::new(),
            dev_build: false,
            request_timeout_seconds: 30,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
