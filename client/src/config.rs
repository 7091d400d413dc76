//! Client configuration.
//!
//! Values come from the environment (a `.env` file is honoured, see
//! `main.rs`) and can be overridden by command-line flags.
//!
//! | Variable              | Default                 |
//! |-----------------------|-------------------------|
//! | `LINREG_BASE_URL`     | `http://localhost:8000` |
//! | `LINREG_TIMEOUT_SECS` | none (wait forever)     |
//! | `LINREG_POLICY`       | `last-resolved`         |

use std::env;
use std::time::Duration;

use linreg_core::{fit_url, ApplyPolicy, DEFAULT_BASE_URL};

use crate::error::{ConfigError, ConfigResult};

pub const ENV_BASE_URL: &str = "LINREG_BASE_URL";
pub const ENV_TIMEOUT: &str = "LINREG_TIMEOUT_SECS";
pub const ENV_POLICY: &str = "LINREG_POLICY";

/// Settings shared by the transport and the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the fitting service
    pub base_url: String,
    /// Optional per-request timeout
    pub timeout: Option<Duration>,
    /// How overlapping responses are applied
    pub policy: ApplyPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            policy: ApplyPolicy::default(),
        }
    }
}

impl ClientConfig {
    /// Build a config from `LINREG_*` environment variables.
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Ok(url) = env::var(ENV_BASE_URL) {
            config = config.with_base_url(&url)?;
        }
        if let Ok(secs) = env::var(ENV_TIMEOUT) {
            config.timeout = Some(parse_timeout(&secs)?);
        }
        if let Ok(policy) = env::var(ENV_POLICY) {
            config.policy = policy.parse().map_err(ConfigError::InvalidPolicy)?;
        }

        Ok(config)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: &str) -> ConfigResult<Self> {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(url.to_string()));
        }
        self.base_url = url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the apply policy.
    pub fn with_policy(mut self, policy: ApplyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Full URL of the fitting endpoint.
    pub fn endpoint(&self) -> String {
        fit_url(&self.base_url)
    }
}

/// Parse a timeout given in (possibly fractional) seconds.
pub fn parse_timeout(value: &str) -> ConfigResult<Duration> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidTimeout(value.to_string()))?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(ConfigError::InvalidTimeout(value.to_string()));
    }
    match Duration::try_from_secs_f64(secs) {
        Ok(timeout) if !timeout.is_zero() => Ok(timeout),
        _ => Err(ConfigError::InvalidTimeout(value.to_string())),
    }
}
