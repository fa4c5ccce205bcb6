// ABOUTME: SQLite-backed implementations of the store contracts
// ABOUTME: Thin delegation onto the Database query methods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

use async_trait::async_trait;
use fitlog_core::errors::AppResult;
use fitlog_core::models::{LogRecord, UserProfile};
use uuid::Uuid;

use super::{LogStore, ProfileStore, TokenStore};
use crate::database::Database;

#[async_trait]
impl ProfileStore for Database {
    async fn get_profile(&self, username: &str) -> AppResult<Option<UserProfile>> {
        Self::get_profile(self, username).await
    }

    async fn set_profile(
        &self,
        username: &str,
        weight_kg: f64,
        height_cm: f64,
    ) -> AppResult<UserProfile> {
        Self::set_profile(self, username, weight_kg, height_cm).await
    }

    async fn create_profile(&self, profile: &UserProfile) -> AppResult<()> {
        Self::create_profile(self, profile).await
    }
}

#[async_trait]
impl LogStore for Database {
    async fn list_logs(&self, username: &str) -> AppResult<Vec<LogRecord>> {
        Self::list_logs(self, username).await
    }

    async fn append_log(&self, record: &LogRecord) -> AppResult<()> {
        Self::append_log(self, record).await
    }

    async fn delete_logs(&self, username: &str, ids: &[Uuid]) -> AppResult<u64> {
        Self::delete_logs(self, username, ids).await
    }

    async fn count_logs(&self, username: &str) -> AppResult<u64> {
        Self::count_logs(self, username).await
    }
}

#[async_trait]
impl TokenStore for Database {
    async fn resolve_token(&self, token: &str) -> AppResult<Option<String>> {
        Self::resolve_token(self, token).await
    }

    async fn insert_token(&self, token: &str, username: &str) -> AppResult<()> {
        Self::insert_token(self, token, username).await
    }
}
