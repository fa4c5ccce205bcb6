// ABOUTME: HTTP route assembly for the Fitlog REST surface
// ABOUTME: Merges per-domain routers and applies trace/cors layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Route assembly.
//!
//! Each domain contributes its own `Router`; this module merges them and
//! applies the shared middleware stack (request tracing, permissive CORS for
//! the browser client).

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::resources::ServerResources;

/// Liveness endpoints
pub mod health;

/// Derived series and recommendation endpoints
pub mod insights;

/// Log list/count/append/delete endpoints
pub mod logs;

/// Profile read/update endpoints
pub mod profile;

/// Build the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(profile::ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(logs::LogRoutes::routes(Arc::clone(&resources)))
        .merge(insights::InsightRoutes::routes(resources))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Permissive CORS for the tracked browser client
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
