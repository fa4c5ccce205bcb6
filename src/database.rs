// ABOUTME: SQLite persistence for profiles, logs, and auth tokens
// ABOUTME: Runtime-bound sqlx queries; migrations run at connection time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! # Database Management
//!
//! SQLite-backed persistence for the tracker. Profiles live in `users`,
//! entries in `logs` (the tagged entry serialized as JSON in a TEXT column,
//! with the timestamp denormalized for ordering), and opaque bearer tokens
//! in `auth_tokens`.
//!
//! The log table is append-only apart from explicit per-id deletion; listing
//! always returns insertion order.

use chrono::Utc;
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{LogEntry, LogRecord, UserProfile};
use sqlx::{Pool, Row, Sqlite, SqlitePool};
use uuid::Uuid;

/// Database manager for profile, log, and token storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or a
    /// migration statement fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Run database migrations.
    ///
    /// # Errors
    ///
    /// Returns an error if any migration statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                username TEXT PRIMARY KEY,
                weight_kg REAL,
                height_cm REAL,
                created_at TEXT NOT NULL,
                last_active TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS logs (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL REFERENCES users(username),
                entry TEXT NOT NULL,
                timestamp TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_logs_username ON logs(username)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS auth_tokens (
                token TEXT PRIMARY KEY,
                username TEXT NOT NULL REFERENCES users(username),
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Access the underlying pool (tests and maintenance tooling)
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Insert a new profile row.
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` if the username is taken.
    pub async fn create_profile(&self, profile: &UserProfile) -> AppResult<()> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            r"
            INSERT INTO users (username, weight_kg, height_cm, created_at, last_active)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(&profile.username)
        .bind(profile.weight_kg)
        .bind(profile.height_cm)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::already_exists(format!("user '{}'", profile.username))
            }
            _ => AppError::from(e),
        })?;
        Ok(())
    }

    /// Fetch a profile by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_profile(&self, username: &str) -> AppResult<Option<UserProfile>> {
        let row = sqlx::query("SELECT username, weight_kg, height_cm FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let username: String = row.try_get("username")?;
                let weight_kg: Option<f64> = row.try_get("weight_kg")?;
                let height_cm: Option<f64> = row.try_get("height_cm")?;
                Ok(Some(UserProfile {
                    username,
                    weight_kg,
                    height_cm,
                }))
            }
            None => Ok(None),
        }
    }

    /// Overwrite a profile's measurements and return the stored profile.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user does not exist.
    pub async fn set_profile(
        &self,
        username: &str,
        weight_kg: f64,
        height_cm: f64,
    ) -> AppResult<UserProfile> {
        let result = sqlx::query(
            "UPDATE users SET weight_kg = ?, height_cm = ?, last_active = ? WHERE username = ?",
        )
        .bind(weight_kg)
        .bind(height_cm)
        .bind(Utc::now().to_rfc3339())
        .bind(username)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("user '{username}'")));
        }

        Ok(UserProfile::with_measurements(username, weight_kg, height_cm))
    }

    /// List a user's log records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored entry cannot be
    /// deserialized.
    pub async fn list_logs(&self, username: &str) -> AppResult<Vec<LogRecord>> {
        let rows = sqlx::query(
            "SELECT id, username, entry FROM logs WHERE username = ? ORDER BY timestamp ASC, rowid ASC",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.try_get("id")?;
            let id = Uuid::parse_str(&id)
                .map_err(|e| AppError::database(format!("malformed log id '{id}': {e}")))?;
            let entry: String = row.try_get("entry")?;
            let entry: LogEntry = serde_json::from_str(&entry)
                .map_err(|e| AppError::database(format!("malformed log entry {id}: {e}")))?;
            let username: String = row.try_get("username")?;
            records.push(LogRecord {
                id,
                username,
                entry,
            });
        }
        Ok(records)
    }

    /// Append one log record.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the entry cannot be
    /// serialized.
    pub async fn append_log(&self, record: &LogRecord) -> AppResult<()> {
        let entry = serde_json::to_string(&record.entry)
            .map_err(|e| AppError::internal(format!("log entry serialization failed: {e}")))?;

        sqlx::query("INSERT INTO logs (id, username, entry, timestamp) VALUES (?, ?, ?, ?)")
            .bind(record.id.to_string())
            .bind(&record.username)
            .bind(&entry)
            .bind(record.entry.timestamp().to_rfc3339())
            .execute(&self.pool)
            .await?;

        sqlx::query("UPDATE users SET last_active = ? WHERE username = ?")
            .bind(Utc::now().to_rfc3339())
            .bind(&record.username)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Count a user's log records.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn count_logs(&self, username: &str) -> AppResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM logs WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await?;
        let count: i64 = row.try_get("count")?;
        Ok(count.max(0) as u64)
    }

    /// Delete the given log ids for one user; returns how many went away.
    ///
    /// Ids belonging to other users are ignored, not errors.
    ///
    /// # Errors
    ///
    /// Returns an error if a delete statement fails.
    pub async fn delete_logs(&self, username: &str, ids: &[Uuid]) -> AppResult<u64> {
        let mut deleted = 0;
        for id in ids {
            let result = sqlx::query("DELETE FROM logs WHERE id = ? AND username = ?")
                .bind(id.to_string())
                .bind(username)
                .execute(&self.pool)
                .await?;
            deleted += result.rows_affected();
        }
        Ok(deleted)
    }

    /// Store an opaque bearer token for a username.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn insert_token(&self, token: &str, username: &str) -> AppResult<()> {
        sqlx::query("INSERT INTO auth_tokens (token, username, created_at) VALUES (?, ?, ?)")
            .bind(token)
            .bind(username)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Resolve an opaque bearer token to its username, if known.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn resolve_token(&self, token: &str) -> AppResult<Option<String>> {
        let row = sqlx::query("SELECT username FROM auth_tokens WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|row| row.try_get::<String, _>("username").map_err(AppError::from))
            .transpose()
    }
}
