// ABOUTME: Server configuration module
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Server configuration.
//!
//! Configuration is environment-only; there is no config file format to
//! parse or keep in sync. Binary flags may override individual values.

/// Environment variable parsing into [`environment::ServerConfig`]
pub mod environment;

pub use environment::ServerConfig;
