//! Server configuration read from the environment.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

use crate::range::Range;

/// Errors related to application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed.
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidEnvVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub default_range: Range,
    pub cors_any_origin: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3001,
            default_range: Range::Week,
            cors_any_origin: true,
        }
    }
}

impl ServerConfig {
    /// Load from `INDICATORS_HOST`, `PORT`, `DEFAULT_RANGE` and
    /// `CORS_ALLOW_ANY`, keeping defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(v) = lookup("INDICATORS_HOST") {
            config.host = parse_var("INDICATORS_HOST", v)?;
        }
        if let Some(v) = lookup("PORT") {
            config.port = parse_var("PORT", v)?;
        }
        if let Some(v) = lookup("DEFAULT_RANGE") {
            config.default_range = parse_var("DEFAULT_RANGE", v)?;
        }
        if let Some(v) = lookup("CORS_ALLOW_ANY") {
            config.cors_any_origin = parse_var("CORS_ALLOW_ANY", v)?;
        }
        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(name: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError::InvalidEnvVar {
        name,
        reason: e.to_string(),
        value,
    })
}
