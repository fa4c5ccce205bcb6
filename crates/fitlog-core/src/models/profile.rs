// ABOUTME: User profile model with optional body measurements
// ABOUTME: BMI is derived on demand and never stored authoritatively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

use serde::{Deserialize, Serialize};

/// A user's baseline profile.
///
/// Weight and height are optional: a freshly registered user has neither, and
/// mutating log operations refuse to run until both are supplied. The profile
/// is always passed into and returned from aggregation calls explicitly --
/// callers own the authoritative copy and persist returned updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique, immutable identifier
    pub username: String,
    /// Body weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Body height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
}

impl UserProfile {
    /// Create a profile with no measurements on record
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            weight_kg: None,
            height_cm: None,
        }
    }

    /// Create a profile with known weight and height
    #[must_use]
    pub fn with_measurements(username: impl Into<String>, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            username: username.into(),
            weight_kg: Some(weight_kg),
            height_cm: Some(height_cm),
        }
    }

    /// Whether both weight and height are on record
    #[must_use]
    pub const fn has_measurements(&self) -> bool {
        self.weight_kg.is_some() && self.height_cm.is_some()
    }

    /// Body Mass Index, `weight(kg) / height(m)^2`, rounded to 2 decimals.
    ///
    /// Derived, never stored. `None` when either measurement is absent.
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.weight_kg?;
        let height_m = self.height_cm? / 100.0;
        if height_m <= 0.0 {
            return None;
        }
        Some(round2(weight / (height_m * height_m)))
    }
}

/// Round to 2 decimal places, the precision every derived body metric uses
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
