//! Process configuration, read from the environment.

use std::net::{AddrParseError, SocketAddr};

use thiserror::Error;

/// Environment variable holding the listen address (e.g. `127.0.0.1:8080`).
pub const BIND_ADDR_ENV: &str = "STOCKROOM_BIND_ADDR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid STOCKROOM_BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3001)),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (tests pass a closure
    /// instead of mutating the process environment).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match lookup(BIND_ADDR_ENV) {
            Some(value) => {
                config.bind_addr = value
                    .trim()
                    .parse()
                    .map_err(|source| ConfigError::InvalidBindAddr {
                        value: value.clone(),
                        source,
                    })?;
            }
            None => {
                tracing::info!(bind_addr = %config.bind_addr, "{BIND_ADDR_ENV} not set; using default");
            }
        }

        Ok(config)
    }
}
