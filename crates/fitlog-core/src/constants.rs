// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Service names and validation bounds shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Application constants organized by domain

/// Service identifiers used in logs and structured output
pub mod service_names {
    /// The REST backend binary
    pub const FITLOG_SERVER: &str = "fitlog-server";
}

/// Validation bounds for profile measurements.
///
/// Upper bounds match the ranges the BMI and calorie formulas are meaningful
/// for; values outside them are rejected at the API boundary rather than
/// propagated into derived metrics.
pub mod measurement_limits {
    /// Maximum accepted body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 300.0;

    /// Maximum accepted body height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
}
