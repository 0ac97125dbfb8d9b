//! Environment-backed configuration, read once at startup.

use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} is not in the correct format")]
    Invalid(&'static str),
}

/// Immutable process configuration. Database credentials ride inside
/// `DATABASE_URL`; nothing is read interactively.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: Ipv4Addr,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let host = match std::env::var("HOST") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid("HOST"))?,
            Err(_) => default_host(),
        };

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            Err(_) => default_port(),
        };

        let max_connections = match std::env::var("DB_MAX_CONNECTIONS") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid("DB_MAX_CONNECTIONS"))?,
            Err(_) => default_max_connections(),
        };

        Ok(Config {
            database_url,
            host,
            port,
            max_connections,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn default_host() -> Ipv4Addr {
    Ipv4Addr::LOCALHOST
}

fn default_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    5
}
