// ABOUTME: Bearer-token identity resolution at the route boundary
// ABOUTME: Tokens are opaque lookups; no issuance or signature mechanics here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! The auth boundary.
//!
//! Routes hand the raw `Authorization` header to [`AuthManager`], which
//! resolves the opaque bearer token to a username through the token store.
//! Everything downstream trusts that identity; the only further check routes
//! perform is that the path username matches it. Token issuance and
//! credential mechanics live outside this service.

use std::sync::Arc;

use fitlog_core::errors::{AppError, AppResult};
use tracing::debug;

use crate::storage::Storage;

/// Identity resolved from a request credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// The authenticated username
    pub username: String,
}

/// Resolves opaque bearer tokens against the token store
#[derive(Clone)]
pub struct AuthManager {
    storage: Arc<dyn Storage>,
}

impl AuthManager {
    /// Create a manager over the given storage
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Authenticate a request from its `Authorization` header value.
    ///
    /// # Errors
    ///
    /// `AuthRequired` when the header is absent, `AuthInvalid` when it is not
    /// a bearer credential or the token is unknown.
    pub async fn authenticate_request(&self, auth_header: Option<&str>) -> AppResult<AuthResult> {
        let header = auth_header.ok_or_else(AppError::auth_required)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::auth_invalid("authorization header is not a bearer token"))?;

        match self.storage.resolve_token(token).await? {
            Some(username) => {
                debug!(username = %username, "token resolved");
                Ok(AuthResult { username })
            }
            None => Err(AppError::auth_invalid("unknown or expired token")),
        }
    }

    /// Require that the authenticated identity owns the addressed resource.
    ///
    /// # Errors
    ///
    /// `PermissionDenied` when the usernames differ.
    pub fn require_user(auth: &AuthResult, username: &str) -> AppResult<()> {
        if auth.username == username {
            Ok(())
        } else {
            Err(AppError::permission_denied(format!(
                "token identity '{}' does not match requested user '{username}'",
                auth.username
            )))
        }
    }
}
