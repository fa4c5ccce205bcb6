// ABOUTME: Insight route handlers - derived series and recommendations
// ABOUTME: Recomputed from the stored history on every request, never cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Insight routes.
//!
//! The read side of the aggregation engine: both endpoints load the profile
//! and the full ordered history, recompute from scratch, and return the
//! derived values. A profile without measurements degrades the derived
//! columns instead of failing (only an unknown user is a 404).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{LogEntry, UserProfile};
use fitlog_intelligence::{build_series, recommend, AggregateSeries, RecommendationReport};
use serde::Serialize;

use super::profile::{ProfileResponse, ProfileRoutes};
use crate::resources::ServerResources;

/// Response for `GET /insights/:username/series`
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    /// The profile the projection was anchored on
    pub profile: ProfileResponse,
    /// The derived series and totals
    #[serde(flatten)]
    pub series: AggregateSeries,
}

/// Insight routes implementation
pub struct InsightRoutes;

impl InsightRoutes {
    /// Create all insight routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/insights/:username/series", get(Self::handle_series))
            .route(
                "/insights/:username/recommendations",
                get(Self::handle_recommendations),
            )
            .with_state(resources)
    }

    /// Handle `GET /insights/:username/series`
    async fn handle_series(
        State(resources): State<Arc<ServerResources>>,
        Path(username): Path<String>,
        headers: HeaderMap,
    ) -> AppResult<Json<SeriesResponse>> {
        ProfileRoutes::authorize(&headers, &resources, &username).await?;

        let (profile, history) = Self::load_inputs(&resources, &username).await?;
        let series = build_series(&profile, &history);

        Ok(Json(SeriesResponse {
            profile: profile.into(),
            series,
        }))
    }

    /// Handle `GET /insights/:username/recommendations`
    async fn handle_recommendations(
        State(resources): State<Arc<ServerResources>>,
        Path(username): Path<String>,
        headers: HeaderMap,
    ) -> AppResult<Json<RecommendationReport>> {
        ProfileRoutes::authorize(&headers, &resources, &username).await?;

        let (profile, history) = Self::load_inputs(&resources, &username).await?;
        let series = build_series(&profile, &history);
        let report = recommend(&profile, &series);

        Ok(Json(report))
    }

    /// Fetch the profile and ordered entry history for one user
    async fn load_inputs(
        resources: &Arc<ServerResources>,
        username: &str,
    ) -> AppResult<(UserProfile, Vec<LogEntry>)> {
        let profile = resources
            .storage
            .get_profile(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("user '{username}'")))?;

        let history: Vec<LogEntry> = resources
            .storage
            .list_logs(username)
            .await?
            .into_iter()
            .map(|record| record.entry)
            .collect();

        Ok((profile, history))
    }
}
