// ABOUTME: Environment variable parsing for server configuration
// ABOUTME: Host, port, and database URL with development-friendly defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

use std::env;

/// Default HTTP port, matching the port the original deployment served on
const DEFAULT_HTTP_PORT: u16 = 5004;

/// Runtime configuration for the server, read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener
    pub host: String,
    /// HTTP port
    pub http_port: u16,
    /// SQLite database URL (`sqlite:...`)
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            http_port: DEFAULT_HTTP_PORT,
            database_url: "sqlite:./data/fitlog.db".into(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from environment variables, falling back to
    /// development defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let http_port = env::var("HTTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.http_port);

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            http_port,
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
        }
    }

    /// The socket address string to bind the listener on
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.http_port, 5004);
        assert_eq!(config.bind_address(), "127.0.0.1:5004");
    }
}
