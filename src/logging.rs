// ABOUTME: Logging configuration and structured logging setup
// ABOUTME: Configures log levels and output formats via tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Structured logging configuration.
//!
//! Reads `RUST_LOG` / `LOG_FORMAT` / `ENVIRONMENT` and initializes the global
//! tracing subscriber once at startup.

use anyhow::Result;
use std::env;
use tracing_subscriber::EnvFilter;

use fitlog_core::constants::service_names::FITLOG_SERVER;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log filter directive (trace, debug, info, warn, error, or full filter)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Service name for structured logging
    pub service_name: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            service_name: FITLOG_SERVER.into(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        // Production defaults to machine-readable output unless overridden.
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            Ok(_) => LogFormat::Pretty,
            Err(_) if environment == "production" => LogFormat::Json,
            Err(_) => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| FITLOG_SERVER.into()),
            environment,
        }
    }

    /// Initialize the global tracing subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if a subscriber was already installed or the filter
    /// directive cannot be parsed into a usable filter.
    pub fn init(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        match self.format {
            LogFormat::Json => builder
                .json()
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?,
            LogFormat::Compact => builder
                .compact()
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?,
            LogFormat::Pretty => builder
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?,
        }

        tracing::info!(
            service = %self.service_name,
            environment = %self.environment,
            "logging initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(config.service_name, "fitlog-server");
    }
}
