/**
 * Server Configuration
 *
 * This module loads the process configuration from environment variables
 * (after `.env`, if present, has been read by the binary).
 *
 * | Variable        | Required | Default   |
 * |-----------------|----------|-----------|
 * | `JWT_SECRET`    | yes      |           |
 * | `JWT_ALGORITHM` | no       | `HS256`   |
 * | `DATABASE_URL`  | no       | in-memory |
 * | `SERVER_HOST`   | no       | `0.0.0.0` |
 * | `SERVER_PORT`   | no       | `3000`    |
 *
 * Without `DATABASE_URL` the server keeps its data in memory and loses it
 * on restart.
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use jsonwebtoken::Algorithm;
use thiserror::Error;

use crate::backend::auth::sessions::JwtKeys;
use crate::backend::lists::store::{ListStore, MemoryListStore, PgListStore, StoreResult};

pub const DEFAULT_PORT: u16 = 3000;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// PostgreSQL connection string; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// Shared secret for bearer token signatures
    pub jwt_secret: String,
    /// Symmetric signature algorithm
    pub jwt_algorithm: Algorithm,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Some(secret) = lookup("JWT_SECRET") {
            builder = builder.jwt_secret(secret);
        }
        if let Some(algorithm) = lookup("JWT_ALGORITHM") {
            builder = builder.jwt_algorithm(parse_algorithm(&algorithm)?);
        }
        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            builder = builder.database_url(url);
        }
        if let Some(host) = lookup("SERVER_HOST") {
            let host = host.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_HOST",
                value: host.clone(),
                reason: "expected an IP address",
            })?;
            builder = builder.host(host);
        }
        if let Some(port) = lookup("SERVER_PORT") {
            let port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                value: port.clone(),
                reason: "expected a port number",
            })?;
            builder = builder.port(port);
        }

        builder.build()
    }

    /// Token keys for the configured secret and algorithm
    pub fn jwt_keys(&self) -> JwtKeys {
        JwtKeys::from_secret(self.jwt_secret.as_bytes(), self.jwt_algorithm)
    }
}

fn parse_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    match value.to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        _ => Err(ConfigError::InvalidValue {
            key: "JWT_ALGORITHM",
            value: value.to_string(),
            reason: "expected HS256, HS384 or HS512",
        }),
    }
}

/// Builder for AppConfig
#[derive(Debug)]
pub struct AppConfigBuilder {
    host: IpAddr,
    port: u16,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    jwt_algorithm: Algorithm,
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: None,
            jwt_algorithm: Algorithm::HS256,
        }
    }
}

impl AppConfigBuilder {
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn jwt_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.jwt_algorithm = algorithm;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let jwt_secret = self
            .jwt_secret
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        Ok(AppConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            database_url: self.database_url,
            jwt_secret,
            jwt_algorithm: self.jwt_algorithm,
        })
    }
}

/// Open the configured list store
///
/// # Returns
///
/// - `PgListStore` if `database_url` is set (connection and migrations must succeed)
/// - `MemoryListStore` otherwise
pub async fn load_store(config: &AppConfig) -> StoreResult<Arc<dyn ListStore>> {
    match &config.database_url {
        Some(url) => {
            let store = PgListStore::connect(url).await.map_err(|e| {
                tracing::error!("Failed to open database: {}", e);
                e
            })?;
            Ok(Arc::new(store))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Lists are kept in memory and lost on restart.");
            Ok(Arc::new(MemoryListStore::new()))
        }
    }
}
