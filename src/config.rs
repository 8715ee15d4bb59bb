// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment exactly once at startup and
//! carried as a typed value from then on. In particular the shared token
//! secret is read here and injected into the verifier; nothing re-reads the
//! environment at request time.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JWT_KEY` | Shared HMAC secret for token verification | Required |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Environment variable name for the shared token secret.
pub const JWT_KEY_ENV: &str = "JWT_KEY";

/// Environment variable name for the logging format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Errors raised while loading configuration at startup.
///
/// These are fatal: the process cannot serve requests without a verifier
/// secret or a parseable bind address.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JWT_KEY must be set")]
    MissingJwtKey,

    #[error("JWT_KEY must not be empty")]
    EmptyJwtKey,

    #[error("PORT must be a valid port number: {0}")]
    InvalidPort(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared HMAC secret used to verify session and wallet tokens.
    pub jwt_key: String,
    /// Server bind address.
    pub host: String,
    /// Server bind port.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_key = env::var(JWT_KEY_ENV).map_err(|_| ConfigError::MissingJwtKey)?;
        if jwt_key.is_empty() {
            return Err(ConfigError::EmptyJwtKey);
        }

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port_raw = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port: u16 = port_raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw))?;

        Ok(Self { jwt_key, host, port })
    }

    /// The socket address string to bind the listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
