// ABOUTME: Profile route handlers - read and update baseline measurements
// ABOUTME: All handlers require a resolved identity matching the path user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Profile routes.
//!
//! `GET /user/:username` returns the stored profile with its derived BMI;
//! `PUT /user/:username` overwrites the measurements after bounds
//! validation. Both require the bearer identity to match the path username.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, put},
    Json, Router,
};
use fitlog_core::constants::measurement_limits::{MAX_HEIGHT_CM, MAX_WEIGHT_KG};
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::UserProfile;
use serde::{Deserialize, Serialize};

use crate::auth::{AuthManager, AuthResult};
use crate::resources::ServerResources;

/// Profile as returned over the wire, with the derived BMI attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Username
    pub username: String,
    /// Body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Body height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Derived BMI, rounded to 2 decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let bmi = profile.bmi();
        Self {
            username: profile.username,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            bmi,
        }
    }
}

/// Body for `PUT /user/:username`
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    /// New body weight in kilograms
    pub weight_kg: f64,
    /// New body height in centimeters
    pub height_cm: f64,
}

/// Profile routes implementation
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create all profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/user/:username", get(Self::handle_get_profile))
            .route("/user/:username", put(Self::handle_update_profile))
            .with_state(resources)
    }

    /// Resolve the bearer identity and check it owns the path username
    pub(crate) async fn authorize(
        headers: &HeaderMap,
        resources: &Arc<ServerResources>,
        username: &str,
    ) -> AppResult<AuthResult> {
        let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());
        let auth = resources.auth.authenticate_request(auth_header).await?;
        AuthManager::require_user(&auth, username)?;
        Ok(auth)
    }

    /// Handle `GET /user/:username`
    async fn handle_get_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(username): Path<String>,
        headers: HeaderMap,
    ) -> AppResult<Json<ProfileResponse>> {
        Self::authorize(&headers, &resources, &username).await?;

        let profile = resources
            .storage
            .get_profile(&username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("user '{username}'")))?;

        Ok(Json(profile.into()))
    }

    /// Handle `PUT /user/:username`
    async fn handle_update_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(username): Path<String>,
        headers: HeaderMap,
        Json(request): Json<UpdateProfileRequest>,
    ) -> AppResult<Json<ProfileResponse>> {
        Self::authorize(&headers, &resources, &username).await?;
        validate_measurements(request.weight_kg, request.height_cm)?;

        let profile = resources
            .storage
            .set_profile(&username, request.weight_kg, request.height_cm)
            .await?;

        Ok(Json(profile.into()))
    }
}

fn validate_measurements(weight_kg: f64, height_cm: f64) -> AppResult<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > MAX_WEIGHT_KG {
        return Err(AppError::invalid_input(format!(
            "weight must be between 0 and {MAX_WEIGHT_KG} kg"
        )));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 || height_cm > MAX_HEIGHT_CM {
        return Err(AppError::invalid_input(format!(
            "height must be between 0 and {MAX_HEIGHT_CM} cm"
        )));
    }
    Ok(())
}
