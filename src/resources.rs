// ABOUTME: Shared server state handed to every route handler
// ABOUTME: Storage, auth manager, and configuration behind one Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

use std::sync::Arc;

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::storage::Storage;

/// Shared state for all routes.
///
/// Constructed once at startup and cloned into handlers via `Arc`; holds the
/// storage backend behind the trait object so tests can swap in the
/// in-memory implementation.
pub struct ServerResources {
    /// Storage backend (profiles, logs, tokens)
    pub storage: Arc<dyn Storage>,
    /// Bearer-token resolver
    pub auth: AuthManager,
    /// Runtime configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Assemble resources around a storage backend
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, config: ServerConfig) -> Self {
        let auth = AuthManager::new(Arc::clone(&storage));
        Self {
            storage,
            auth,
            config,
        }
    }
}
