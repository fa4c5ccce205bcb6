// ABOUTME: Narrow store contracts the routes and aggregator callers depend on
// ABOUTME: ProfileStore, LogStore, and TokenStore traits plus implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Store contracts.
//!
//! Three narrow async traits: profiles, logs, and auth tokens. The server
//! wires them to SQLite ([`crate::database::Database`]); tests use
//! [`memory::MemoryStorage`]. Stores surface failures unchanged as
//! `AppError`s and never retry -- retry policy belongs to the caller.

use async_trait::async_trait;
use fitlog_core::errors::AppResult;
use fitlog_core::models::{LogRecord, UserProfile};
use uuid::Uuid;

/// In-memory storage for tests
pub mod memory;

/// SQLite-backed trait implementations
pub mod sqlite;

/// Baseline profile persistence
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch a profile by username
    async fn get_profile(&self, username: &str) -> AppResult<Option<UserProfile>>;

    /// Overwrite a profile's measurements, returning the stored profile
    async fn set_profile(
        &self,
        username: &str,
        weight_kg: f64,
        height_cm: f64,
    ) -> AppResult<UserProfile>;

    /// Insert a brand new profile
    async fn create_profile(&self, profile: &UserProfile) -> AppResult<()>;
}

/// Append-only log persistence with explicit per-id deletion
#[async_trait]
pub trait LogStore: Send + Sync {
    /// All of a user's records in insertion order
    async fn list_logs(&self, username: &str) -> AppResult<Vec<LogRecord>>;

    /// Append one record
    async fn append_log(&self, record: &LogRecord) -> AppResult<()>;

    /// Delete the given ids for one user; returns how many were removed
    async fn delete_logs(&self, username: &str, ids: &[Uuid]) -> AppResult<u64>;

    /// Number of records on file for one user
    async fn count_logs(&self, username: &str) -> AppResult<u64>;
}

/// Opaque bearer-token resolution
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Resolve a token to its username, if known
    async fn resolve_token(&self, token: &str) -> AppResult<Option<String>>;

    /// Register a token for a username
    async fn insert_token(&self, token: &str, username: &str) -> AppResult<()>;
}

/// The full storage surface the server needs
pub trait Storage: ProfileStore + LogStore + TokenStore {}

impl<T: ProfileStore + LogStore + TokenStore> Storage for T {}
