// ABOUTME: Domain models for the Fitlog platform
// ABOUTME: UserProfile, LogEntry, and LogRecord definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Core domain models shared by the aggregation engine, storage layer,
//! and REST routes.

/// Exercise and meal log entry types
pub mod log_entry;

/// User profile with optional body measurements
pub mod profile;

pub use log_entry::{LogEntry, LogRecord};
pub use profile::UserProfile;
