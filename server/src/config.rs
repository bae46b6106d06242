//! Server configuration read from the environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_FRONTEND_DIST: &str = "../frontend/dist";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the shell server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the server listens on.
    pub bind_addr: SocketAddr,
    /// Directory holding the built frontend assets.
    pub frontend_dist: PathBuf,
    /// Origin allowed by the CORS layer.
    pub allowed_origin: String,
}

impl ServerConfig {
    /// Read the configuration from the environment, falling back to
    /// development defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = parse_bind_addr(
            &env::var("KAS_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        )?;
        let frontend_dist = env::var("KAS_FRONTEND_DIST")
            .unwrap_or_else(|_| DEFAULT_FRONTEND_DIST.to_string())
            .into();
        let allowed_origin =
            env::var("KAS_ALLOWED_ORIGIN").unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());

        Ok(Self {
            bind_addr,
            frontend_dist,
            allowed_origin,
        })
    }
}

fn parse_bind_addr(value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidBindAddr {
        value: value.to_string(),
        source,
    })
}
