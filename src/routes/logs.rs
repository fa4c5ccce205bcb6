// ABOUTME: Log route handlers - list, count, append, and delete entries
// ABOUTME: Appending runs the aggregator and persists the shifted profile first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Log routes.
//!
//! `POST /logs/:username` is where the record-step calculation runs: the
//! handler loads the profile, lets the aggregator derive the shifted weight
//! and the new entry, persists the profile, then appends the entry -- in that
//! order, awaited, so any series computed after the response includes the new
//! entry against the updated baseline. The updated profile and the stored
//! record come back in the response body; there is no ambient notification.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post},
    Json, Router,
};
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::LogRecord;
use fitlog_intelligence::aggregator;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::profile::{ProfileResponse, ProfileRoutes};
use crate::resources::ServerResources;

/// Body for `POST /logs/:username` -- one tracked event
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogRequest {
    /// An exercise session
    Exercise {
        /// Activity name, e.g. "Running"
        activity: String,
        /// Session duration in minutes
        duration_minutes: f64,
    },
    /// A meal
    Meal {
        /// Meal name, e.g. "Breakfast"
        name: String,
        /// Calories consumed
        calories_intake: f64,
    },
}

/// Response for a successful append
#[derive(Debug, Serialize)]
pub struct LogCreatedResponse {
    /// The stored record, id included
    pub record: LogRecord,
    /// The profile after the entry's weight shift was applied
    pub profile: ProfileResponse,
}

/// Body for `DELETE /logs/:username`
#[derive(Debug, Deserialize)]
pub struct DeleteLogsRequest {
    /// Record ids to remove
    pub ids: Vec<Uuid>,
}

/// Response for a delete
#[derive(Debug, Serialize)]
pub struct DeleteLogsResponse {
    /// How many records were removed
    pub deleted: u64,
}

/// Response for the count endpoint
#[derive(Debug, Serialize)]
pub struct LogCountResponse {
    /// Number of records on file
    pub count: u64,
}

/// Log routes implementation
pub struct LogRoutes;

impl LogRoutes {
    /// Create all log routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/logs/:username", get(Self::handle_list_logs))
            .route("/logs/:username", post(Self::handle_append_log))
            .route("/logs/:username", delete(Self::handle_delete_logs))
            .route("/logs/:username/count", get(Self::handle_count_logs))
            .with_state(resources)
    }

    /// Handle `GET /logs/:username`
    async fn handle_list_logs(
        State(resources): State<Arc<ServerResources>>,
        Path(username): Path<String>,
        headers: HeaderMap,
    ) -> AppResult<Json<Vec<LogRecord>>> {
        ProfileRoutes::authorize(&headers, &resources, &username).await?;
        let records = resources.storage.list_logs(&username).await?;
        Ok(Json(records))
    }

    /// Handle `GET /logs/:username/count`
    async fn handle_count_logs(
        State(resources): State<Arc<ServerResources>>,
        Path(username): Path<String>,
        headers: HeaderMap,
    ) -> AppResult<Json<LogCountResponse>> {
        ProfileRoutes::authorize(&headers, &resources, &username).await?;
        let count = resources.storage.count_logs(&username).await?;
        Ok(Json(LogCountResponse { count }))
    }

    /// Handle `POST /logs/:username`
    async fn handle_append_log(
        State(resources): State<Arc<ServerResources>>,
        Path(username): Path<String>,
        headers: HeaderMap,
        Json(request): Json<LogRequest>,
    ) -> AppResult<Json<LogCreatedResponse>> {
        ProfileRoutes::authorize(&headers, &resources, &username).await?;

        let profile = resources
            .storage
            .get_profile(&username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("user '{username}'")))?;

        let outcome = match request {
            LogRequest::Exercise {
                activity,
                duration_minutes,
            } => aggregator::record_exercise(&profile, &activity, duration_minutes)?,
            LogRequest::Meal {
                name,
                calories_intake,
            } => aggregator::record_meal(&profile, &name, calories_intake)?,
        };

        // The aggregator refuses to run without measurements, so both are
        // present on the returned profile.
        let (weight_kg, height_cm) = match (outcome.profile.weight_kg, outcome.profile.height_cm) {
            (Some(weight), Some(height)) => (weight, height),
            _ => return Err(AppError::internal("aggregator returned a bare profile")),
        };

        // Persist the shifted profile, then the entry. Awaited in order so a
        // follow-up series request sees a consistent store.
        let stored_profile = resources
            .storage
            .set_profile(&username, weight_kg, height_cm)
            .await?;

        let record = LogRecord::new(&username, outcome.entry);
        resources.storage.append_log(&record).await?;

        info!(
            username = %username,
            kind = record.entry.kind(),
            record_id = %record.id,
            "log entry recorded"
        );

        Ok(Json(LogCreatedResponse {
            record,
            profile: stored_profile.into(),
        }))
    }

    /// Handle `DELETE /logs/:username`
    async fn handle_delete_logs(
        State(resources): State<Arc<ServerResources>>,
        Path(username): Path<String>,
        headers: HeaderMap,
        Json(request): Json<DeleteLogsRequest>,
    ) -> AppResult<Json<DeleteLogsResponse>> {
        ProfileRoutes::authorize(&headers, &resources, &username).await?;

        if request.ids.is_empty() {
            return Err(AppError::invalid_input("ids must not be empty"));
        }

        let deleted = resources
            .storage
            .delete_logs(&username, &request.ids)
            .await?;

        info!(username = %username, deleted, "log entries deleted");
        Ok(Json(DeleteLogsResponse { deleted }))
    }
}
