// ABOUTME: Fitlog REST backend - persists profiles and logs, serves derived insights
// ABOUTME: Thin axum surface over the fitlog-intelligence aggregation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

#![deny(unsafe_code)]

//! # Fitlog Server
//!
//! REST backend for the Fitlog tracker. The engineering core lives in
//! `fitlog-intelligence`; this crate supplies the thin surrounding system:
//! SQLite persistence for profiles and logs, an opaque-token auth boundary,
//! and JSON routes that sequence append-then-recompute for their callers.
//!
//! ## Modules
//!
//! - **config**: environment-driven server configuration
//! - **logging**: structured logging setup (tracing)
//! - **database**: SQLite-backed persistence (sqlx)
//! - **storage**: the narrow store contracts and their implementations
//! - **auth**: bearer-token identity resolution
//! - **resources**: shared state handed to every route
//! - **routes**: the HTTP surface

/// Bearer-token identity resolution at the route boundary
pub mod auth;

/// Environment-driven server configuration
pub mod config;

/// SQLite-backed persistence for profiles, logs, and tokens
pub mod database;

/// Structured logging configuration and setup
pub mod logging;

/// Shared server state handed to every route
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Narrow store contracts and their sqlite/in-memory implementations
pub mod storage;
