// ABOUTME: Tagged log entry model for exercise sessions and meals
// ABOUTME: LogRecord is the store-level envelope carrying ownership and an id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single tracked event: one exercise session or one meal.
///
/// Entries are appended in timestamp order and never mutated after the fact;
/// the aggregation engine reads them by value. Calorie fields are always
/// non-negative -- record operations normalize invalid input to zero before
/// an entry is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEntry {
    /// An exercise session that burns calories
    Exercise {
        /// Activity name, e.g. "Running"
        activity: String,
        /// Session duration in minutes
        duration_minutes: f64,
        /// Calories burnt, derived from duration
        calories_burnt: f64,
        /// BMI immediately after this entry was applied to the profile
        bmi_after: f64,
        /// When the session was logged
        timestamp: DateTime<Utc>,
    },
    /// A meal that adds calorie intake
    Meal {
        /// Meal name, e.g. "Breakfast"
        name: String,
        /// Calories consumed
        calories_intake: f64,
        /// BMI immediately after this entry was applied to the profile
        bmi_after: f64,
        /// When the meal was logged
        timestamp: DateTime<Utc>,
    },
}

impl LogEntry {
    /// Signed calorie contribution: negative for exercise, positive for meals
    #[must_use]
    pub const fn net_calories(&self) -> f64 {
        match self {
            Self::Exercise { calories_burnt, .. } => -*calories_burnt,
            Self::Meal {
                calories_intake, ..
            } => *calories_intake,
        }
    }

    /// When this entry was logged
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Exercise { timestamp, .. } | Self::Meal { timestamp, .. } => *timestamp,
        }
    }

    /// BMI recorded at logging time, for display alongside the entry
    #[must_use]
    pub const fn bmi_after(&self) -> f64 {
        match self {
            Self::Exercise { bmi_after, .. } | Self::Meal { bmi_after, .. } => *bmi_after,
        }
    }

    /// Stable tag for logging and storage, matching the serde tag
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Exercise { .. } => "exercise",
            Self::Meal { .. } => "meal",
        }
    }
}

/// Store-level envelope around a [`LogEntry`].
///
/// The id exists so entries can be deleted individually or in bulk; the
/// aggregation engine itself never sees ids, only ordered entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Unique record identifier
    pub id: Uuid,
    /// Owning profile's username
    pub username: String,
    /// The tracked event
    pub entry: LogEntry,
}

impl LogRecord {
    /// Wrap an entry for storage under the given username
    #[must_use]
    pub fn new(username: impl Into<String>, entry: LogEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            entry,
        }
    }
}
