// ABOUTME: In-memory implementation of the store contracts for tests
// ABOUTME: HashMap-backed, ordered log vectors, no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

use std::collections::HashMap;

use async_trait::async_trait;
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{LogRecord, UserProfile};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{LogStore, ProfileStore, TokenStore};

/// In-memory storage used by unit and route tests.
///
/// Preserves the same observable semantics as the SQLite implementation:
/// insertion-ordered logs, per-user deletion, unknown-user updates fail with
/// `ResourceNotFound`.
#[derive(Default)]
pub struct MemoryStorage {
    profiles: RwLock<HashMap<String, UserProfile>>,
    logs: RwLock<HashMap<String, Vec<LogRecord>>>,
    tokens: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryStorage {
    async fn get_profile(&self, username: &str) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.read().await.get(username).cloned())
    }

    async fn set_profile(
        &self,
        username: &str,
        weight_kg: f64,
        height_cm: f64,
    ) -> AppResult<UserProfile> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(username)
            .ok_or_else(|| AppError::not_found(format!("user '{username}'")))?;
        profile.weight_kg = Some(weight_kg);
        profile.height_cm = Some(height_cm);
        Ok(profile.clone())
    }

    async fn create_profile(&self, profile: &UserProfile) -> AppResult<()> {
        let mut profiles = self.profiles.write().await;
        if profiles.contains_key(&profile.username) {
            return Err(AppError::already_exists(format!(
                "user '{}'",
                profile.username
            )));
        }
        profiles.insert(profile.username.clone(), profile.clone());
        Ok(())
    }
}

#[async_trait]
impl LogStore for MemoryStorage {
    async fn list_logs(&self, username: &str) -> AppResult<Vec<LogRecord>> {
        Ok(self
            .logs
            .read()
            .await
            .get(username)
            .cloned()
            .unwrap_or_default())
    }

    async fn append_log(&self, record: &LogRecord) -> AppResult<()> {
        self.logs
            .write()
            .await
            .entry(record.username.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn delete_logs(&self, username: &str, ids: &[Uuid]) -> AppResult<u64> {
        let mut logs = self.logs.write().await;
        let Some(records) = logs.get_mut(username) else {
            return Ok(0);
        };
        let before = records.len();
        records.retain(|record| !ids.contains(&record.id));
        Ok((before - records.len()) as u64)
    }

    async fn count_logs(&self, username: &str) -> AppResult<u64> {
        Ok(self
            .logs
            .read()
            .await
            .get(username)
            .map_or(0, |records| records.len() as u64))
    }
}

#[async_trait]
impl TokenStore for MemoryStorage {
    async fn resolve_token(&self, token: &str) -> AppResult<Option<String>> {
        Ok(self.tokens.read().await.get(token).cloned())
    }

    async fn insert_token(&self, token: &str, username: &str) -> AppResult<()> {
        self.tokens
            .write()
            .await
            .insert(token.to_owned(), username.to_owned());
        Ok(())
    }
}
