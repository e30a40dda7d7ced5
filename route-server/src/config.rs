//! Server configuration.
//!
//! Defaults are overridden by an optional JSON file (path in
//! `ROUTE_SERVER_CONFIG`), which is in turn overridden by individual
//! environment variables.

use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use crate::estimate::EstimatorConfig;
use crate::ratelimit::RateLimitConfig;

/// Path to an optional JSON config file.
pub const CONFIG_PATH_VAR: &str = "ROUTE_SERVER_CONFIG";
/// Socket address to listen on.
pub const ADDR_VAR: &str = "ROUTE_SERVER_ADDR";
/// Requests allowed per client per window.
pub const RATE_LIMIT_MAX_VAR: &str = "RATE_LIMIT_MAX";
/// Rate limit window in seconds.
pub const RATE_LIMIT_WINDOW_VAR: &str = "RATE_LIMIT_WINDOW_SECS";
/// Key rate limits on `X-Forwarded-For` ("true" or "false").
pub const TRUST_FORWARDED_FOR_VAR: &str = "RATE_LIMIT_TRUST_FORWARDED_FOR";

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable or file value could not be used
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this schema
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,

    /// Per-client rate limiting.
    pub rate_limit: RateLimitConfig,

    /// Route estimation settings.
    pub estimator: EstimatorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            rate_limit: RateLimitConfig::default(),
            estimator: EstimatorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Some(value) = lookup(ADDR_VAR) {
            config.bind_addr = parse_var(ADDR_VAR, &value)?;
        }
        if let Some(value) = lookup(RATE_LIMIT_MAX_VAR) {
            config.rate_limit.max_requests = parse_var(RATE_LIMIT_MAX_VAR, &value)?;
        }
        if let Some(value) = lookup(RATE_LIMIT_WINDOW_VAR) {
            config.rate_limit.window_secs = parse_var(RATE_LIMIT_WINDOW_VAR, &value)?;
        }
        if let Some(value) = lookup(TRUST_FORWARDED_FOR_VAR) {
            config.rate_limit.trust_forwarded_for = parse_var(TRUST_FORWARDED_FOR_VAR, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file. Missing keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rate_limit.max_requests == 0 {
            return Err(ConfigError::InvalidValue {
                key: "rateLimit.maxRequests",
                value: "0".to_string(),
            });
        }
        if self.rate_limit.window_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "rateLimit.windowSecs",
                value: "0".to_string(),
            });
        }
        for window in &self.estimator.peak_windows {
            if window.start_hour > window.end_hour || window.end_hour > 23 {
                return Err(ConfigError::InvalidValue {
                    key: "estimator.peakWindows",
                    value: format!("{}-{}", window.start_hour, window.end_hour),
                });
            }
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
