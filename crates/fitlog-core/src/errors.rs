// ABOUTME: Unified error handling for the Fitlog platform
// ABOUTME: ErrorCode taxonomy, AppError type, and HTTP response formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! # Unified Error Handling System
//!
//! This module provides a centralized error handling system for the Fitlog
//! platform. It defines standard error codes and HTTP response formatting to
//! ensure consistent error handling across the aggregation engine, storage
//! layer, and REST routes.
//!
//! No error defined here is fatal to the process; every failure is
//! recoverable by re-invocation with corrected input.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Request carried no credential
    AuthRequired,
    /// Credential was present but could not be resolved to an identity
    AuthInvalid,
    /// Identity resolved but does not own the requested resource
    PermissionDenied,

    // Validation
    /// Request-level input failed validation
    InvalidInput,
    /// Profile weight or height absent when a mutating operation needs them
    MissingProfileData,

    // Resource management
    /// The requested resource was not found
    ResourceNotFound,
    /// A resource with this identifier already exists
    ResourceAlreadyExists,

    // Storage
    /// Storage backend temporarily unreachable
    StoreUnavailable,
    /// Storage operation failed
    DatabaseError,

    // Configuration
    /// Configuration error encountered
    ConfigError,

    // Internal
    /// An internal error occurred
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingProfileData => 400,
            Self::AuthRequired | Self::AuthInvalid => 401,
            Self::PermissionDenied => 403,
            Self::ResourceNotFound => 404,
            Self::ResourceAlreadyExists => 409,
            Self::StoreUnavailable => 503,
            Self::DatabaseError | Self::ConfigError | Self::InternalError => 500,
        }
    }

    /// Get a user-facing description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AuthRequired => "Authentication is required to access this resource",
            Self::AuthInvalid => "The provided authentication credentials are invalid",
            Self::PermissionDenied => "You do not have permission to perform this action",
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingProfileData => {
                "Weight and height are required before logs can be recorded"
            }
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::StoreUnavailable => "The storage backend is temporarily unavailable",
            Self::DatabaseError => "Database operation failed",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Application error carrying an [`ErrorCode`] and a contextual message
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Machine-readable error classification
    pub code: ErrorCode,
    /// Human-readable context for this specific failure
    pub message: String,
}

/// Convenient result alias for fallible Fitlog operations
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create an error with an explicit code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Missing weight/height on a profile that a mutating operation requires
    #[must_use]
    pub fn missing_profile_data(username: &str) -> Self {
        Self::new(
            ErrorCode::MissingProfileData,
            format!("profile '{username}' has no weight/height on record"),
        )
    }

    /// Request input failed validation
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// No credential supplied
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "missing authorization header")
    }

    /// Credential could not be resolved
    #[must_use]
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Identity does not own the resource
    #[must_use]
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PermissionDenied, message)
    }

    /// Resource lookup came back empty
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::new(ErrorCode::ResourceNotFound, format!("{resource} not found"))
    }

    /// Resource already exists
    #[must_use]
    pub fn already_exists(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{resource} already exists"),
        )
    }

    /// Storage backend unreachable
    #[must_use]
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreUnavailable, message)
    }

    /// Storage operation failed
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Configuration problem
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Internal failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// The HTTP status this error maps to
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::store_unavailable(format!("storage unavailable: {err}"))
            }
            sqlx::Error::RowNotFound => Self::not_found("row"),
            other => Self::database(format!("database error: {other}")),
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::Json(serde_json::json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_status_mapping() {
        assert_eq!(ErrorCode::MissingProfileData.http_status(), 400);
        assert_eq!(ErrorCode::AuthRequired.http_status(), 401);
        assert_eq!(ErrorCode::PermissionDenied.http_status(), 403);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::StoreUnavailable.http_status(), 503);
        assert_eq!(ErrorCode::DatabaseError.http_status(), 500);
    }

    #[test]
    fn test_missing_profile_data_message_names_the_user() {
        let err = AppError::missing_profile_data("alice");
        assert_eq!(err.code, ErrorCode::MissingProfileData);
        assert!(err.message.contains("alice"));
    }

    #[test]
    fn test_error_code_serializes_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::MissingProfileData).unwrap();
        assert_eq!(json, "\"MISSING_PROFILE_DATA\"");
    }
}
