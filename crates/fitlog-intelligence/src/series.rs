// ABOUTME: Net-calorie and cumulative weight/BMI series projection
// ABOUTME: Recomputed fresh from the ordered log history on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Derived series over an ordered log history.
//!
//! A series is recomputed from scratch on every request; nothing incremental
//! is cached. [`project`] is the lazy form, [`build_series`] the collected
//! form carrying calorie totals for the recommendation engine.

use fitlog_core::models::{LogEntry, UserProfile};
use serde::{Deserialize, Serialize};

use crate::aggregator::round2;
use crate::physiological_constants::energy::KCAL_PER_KG_BODY_MASS;

/// One derived point per log entry, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Timestamp of the underlying entry
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Signed calorie contribution of the entry (negative for exercise)
    pub net_calories: f64,
    /// Projected weight through this entry; `None` without a baseline weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_weight_kg: Option<f64>,
    /// Projected BMI through this entry, rounded to 2 decimals; `None`
    /// without baseline weight or height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_bmi: Option<f64>,
}

/// Calorie totals over a full history
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalorieTotals {
    /// Sum of all meal intakes (kcal)
    pub intake_kcal: f64,
    /// Sum of all exercise burns (kcal)
    pub burnt_kcal: f64,
    /// Number of entries aggregated
    pub entries: usize,
}

impl CalorieTotals {
    /// Net balance: intake minus burnt
    #[must_use]
    pub fn balance_kcal(&self) -> f64 {
        self.intake_kcal - self.burnt_kcal
    }
}

/// A fully computed series plus its totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSeries {
    /// One point per log entry, insertion order preserved
    pub points: Vec<SeriesPoint>,
    /// Calorie totals over the whole history
    pub totals: CalorieTotals,
}

impl AggregateSeries {
    /// Whether the history was empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Lazily project the derived series for a history.
///
/// The weight column is a *retrospective projection*: every point is anchored
/// to the profile's weight at call time, not the weight when the entry was
/// logged. If the stored weight was edited out of band since the history was
/// recorded, the whole curve shifts with it. Entries carry `bmi_after` for
/// the as-logged value; this projection deliberately does not read it.
///
/// The iterator is finite, restartable (call again to recompute), and never
/// fails: a profile without weight or height degrades the affected columns
/// to `None` instead of erroring.
#[must_use]
pub fn project<'a>(
    profile: &'a UserProfile,
    history: &'a [LogEntry],
) -> impl Iterator<Item = SeriesPoint> + 'a {
    let baseline_kg = profile.weight_kg;
    let height_m = profile.height_cm.map(|cm| cm / 100.0);

    history.iter().scan(0.0_f64, move |running_net, entry| {
        *running_net += entry.net_calories();

        let cumulative_weight_kg =
            baseline_kg.map(|baseline| baseline + *running_net / KCAL_PER_KG_BODY_MASS);
        let cumulative_bmi = match (cumulative_weight_kg, height_m) {
            (Some(weight), Some(height)) if height > 0.0 => {
                Some(round2(weight / (height * height)))
            }
            _ => None,
        };

        Some(SeriesPoint {
            timestamp: entry.timestamp(),
            net_calories: entry.net_calories(),
            cumulative_weight_kg,
            cumulative_bmi,
        })
    })
}

/// Compute the full series and calorie totals for a history.
///
/// Deterministic in its inputs: identical profile and history produce
/// identical output. An empty history yields an empty series with zeroed
/// totals, never an error.
#[must_use]
pub fn build_series(profile: &UserProfile, history: &[LogEntry]) -> AggregateSeries {
    let points: Vec<SeriesPoint> = project(profile, history).collect();

    let mut totals = CalorieTotals {
        entries: history.len(),
        ..CalorieTotals::default()
    };
    for entry in history {
        match entry {
            LogEntry::Exercise { calories_burnt, .. } => totals.burnt_kcal += calories_burnt,
            LogEntry::Meal {
                calories_intake, ..
            } => totals.intake_kcal += calories_intake,
        }
    }

    AggregateSeries { points, totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(minute: u32) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, minute, 0).single().unwrap()
    }

    fn exercise(calories_burnt: f64, minute: u32) -> LogEntry {
        LogEntry::Exercise {
            activity: "Running".into(),
            duration_minutes: calories_burnt / 8.0,
            calories_burnt,
            bmi_after: 0.0,
            timestamp: at(minute),
        }
    }

    fn meal(calories_intake: f64, minute: u32) -> LogEntry {
        LogEntry::Meal {
            name: "Meal".into(),
            calories_intake,
            bmi_after: 0.0,
            timestamp: at(minute),
        }
    }

    #[test]
    fn test_empty_history_yields_empty_series() {
        let profile = UserProfile::with_measurements("alice", 70.0, 170.0);
        let series = build_series(&profile, &[]);

        assert!(series.is_empty());
        assert_eq!(series.totals.entries, 0);
        assert!(series.totals.balance_kcal().abs() < f64::EPSILON);
    }

    #[test]
    fn test_net_calories_signed_per_entry() {
        let profile = UserProfile::with_measurements("alice", 70.0, 170.0);
        let history = [exercise(240.0, 0), meal(500.0, 1)];
        let series = build_series(&profile, &history);

        assert!((series.points[0].net_calories + 240.0).abs() < f64::EPSILON);
        assert!((series.points[1].net_calories - 500.0).abs() < f64::EPSILON);
        assert!((series.totals.balance_kcal() - 260.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cumulative_projection_from_current_baseline() {
        let profile = UserProfile::with_measurements("alice", 70.0, 170.0);
        let history = [exercise(770.0, 0), meal(1540.0, 1)];
        let series = build_series(&profile, &history);

        // 70 - 770/7700 = 69.9
        let first = series.points[0].cumulative_weight_kg.unwrap();
        assert!((first - 69.9).abs() < 1e-9);
        // 69.9 + 1540/7700 = 70.1
        let second = series.points[1].cumulative_weight_kg.unwrap();
        assert!((second - 70.1).abs() < 1e-9);

        // The projection anchors on the weight passed in *now*: shifting the
        // baseline shifts the whole curve.
        let heavier = UserProfile::with_measurements("alice", 80.0, 170.0);
        let shifted = build_series(&heavier, &history);
        let first_shifted = shifted.points[0].cumulative_weight_kg.unwrap();
        assert!((first_shifted - 79.9).abs() < 1e-9);
    }

    #[test]
    fn test_missing_height_degrades_bmi_only() {
        let mut profile = UserProfile::with_measurements("alice", 70.0, 170.0);
        profile.height_cm = None;

        let series = build_series(&profile, &[meal(500.0, 0)]);
        let point = &series.points[0];
        assert!(point.cumulative_weight_kg.is_some());
        assert_eq!(point.cumulative_bmi, None);
    }

    #[test]
    fn test_missing_weight_degrades_weight_and_bmi() {
        let mut profile = UserProfile::with_measurements("alice", 70.0, 170.0);
        profile.weight_kg = None;

        let series = build_series(&profile, &[exercise(240.0, 0)]);
        let point = &series.points[0];
        assert_eq!(point.cumulative_weight_kg, None);
        assert_eq!(point.cumulative_bmi, None);
        // Net calories still computed -- the read path never fails.
        assert!((point.net_calories + 240.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_build_series_is_idempotent() {
        let profile = UserProfile::with_measurements("alice", 70.0, 170.0);
        let history = [exercise(240.0, 0), meal(500.0, 1), exercise(80.0, 2)];

        let first = build_series(&profile, &history);
        let second = build_series(&profile, &history);
        assert_eq!(first, second);
    }

    #[test]
    fn test_project_is_restartable() {
        let profile = UserProfile::with_measurements("alice", 70.0, 170.0);
        let history = [meal(500.0, 0), exercise(240.0, 1)];

        let first: Vec<SeriesPoint> = project(&profile, &history).collect();
        let second: Vec<SeriesPoint> = project(&profile, &history).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
