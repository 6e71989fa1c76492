use std::net::SocketAddr;

use crate::error::ConfigError;

const ADDR_VAR: &str = "LOGOFORGE_ADDR";
const MAX_BODY_VAR: &str = "LOGOFORGE_MAX_BODY_BYTES";

const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3001);
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Runtime settings for the HTTP service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Largest accepted request body
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(DEFAULT_ADDR),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidVar {
                    var: ADDR_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(MAX_BODY_VAR) {
            config.max_body_bytes = match value.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidVar {
                        var: MAX_BODY_VAR,
                        value,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::InvalidVar {
                        var: MAX_BODY_VAR,
                        value,
                        reason: e.to_string(),
                    })
                }
            };
        }

        Ok(config)
    }
}
