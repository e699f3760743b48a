//! Configuration management for the contact intake service.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::{IpAddr, SocketAddr};

/// URL scheme that selects the in-memory store instead of MongoDB.
pub const MEMORY_STORE_URL: &str = "memory://";

/// Which store implementation the configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

/// Configuration for the contact intake service.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string, or `memory://`
    pub mongo_url: String,

    /// Database holding the submissions collection
    pub db_name: String,

    /// Collection name (default: "contact_submissions")
    pub collection_name: String,

    /// Bind address (default: "0.0.0.0")
    pub host: IpAddr,

    /// Bind port (default: 8001)
    pub port: u16,

    /// Allowed CORS origins; `*` allows any (default: "*")
    pub cors_origins: Vec<String>,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `MONGO_URL`: MongoDB connection string (or `memory://`)
    /// - `DB_NAME`: Database name
    ///
    /// Optional environment variables:
    /// - `COLLECTION_NAME`: Collection name (default: "contact_submissions")
    /// - `HOST`: Bind address (default: "0.0.0.0")
    /// - `PORT`: Bind port (default: 8001)
    /// - `CORS_ORIGINS`: Comma-separated origins (default: "*")
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let mongo_url = env::var("MONGO_URL")
            .map_err(|_| ConfigError::MissingVar("MONGO_URL".to_string()))?;

        if !mongo_url.starts_with("mongodb://")
            && !mongo_url.starts_with("mongodb+srv://")
            && mongo_url != MEMORY_STORE_URL
        {
            return Err(ConfigError::InvalidValue {
                var: "MONGO_URL".to_string(),
                reason: "Must start with mongodb:// or mongodb+srv://, or be memory://"
                    .to_string(),
            });
        }

        let db_name =
            env::var("DB_NAME").map_err(|_| ConfigError::MissingVar("DB_NAME".to_string()))?;

        if db_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "DB_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let collection_name =
            env::var("COLLECTION_NAME").unwrap_or_else(|_| "contact_submissions".to_string());
        let host = Self::parse_env_ip("HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = Self::parse_env_u16("PORT", 8001)?;
        let cors_origins = Self::parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        );
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            mongo_url,
            db_name,
            collection_name,
            host,
            port,
            cors_origins,
            log_level,
        })
    }

    /// The store implementation selected by `mongo_url`.
    pub fn store_backend(&self) -> StoreBackend {
        if self.mongo_url == MEMORY_STORE_URL {
            StoreBackend::Memory
        } else {
            StoreBackend::Mongo
        }
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether every origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as an IP address with a default value.
    fn parse_env_ip(var_name: &str, default: IpAddr) -> ConfigResult<IpAddr> {
        match env::var(var_name) {
            Ok(val) => val.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be an IP address, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mongo_url: MEMORY_STORE_URL.to_string(),
            db_name: "portfolio".to_string(),
            collection_name: "contact_submissions".to_string(),
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8001,
            cors_origins: vec!["*".to_string()],
            log_level: "info".to_string(),
        }
    }
}
