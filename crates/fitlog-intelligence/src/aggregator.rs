// ABOUTME: Record-step calculations applied when a new log entry is created
// ABOUTME: Derives calories, weight delta, and BMI for exercise and meal logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Record-step calculations for new exercise and meal entries.
//!
//! Both operations take the profile by reference and return a fresh updated
//! copy alongside the new entry -- nothing here mutates ambient state. The
//! caller owns the authoritative profile and is responsible for persisting
//! the returned one before recomputing any series that should include the
//! new entry.

use chrono::{DateTime, Utc};
use fitlog_core::errors::{AppError, AppResult};
use fitlog_core::models::{LogEntry, UserProfile};
use tracing::debug;

use crate::physiological_constants::energy::{EXERCISE_KCAL_PER_MINUTE, KCAL_PER_KG_BODY_MASS};

/// Result of a record operation: the shifted profile and the entry to append.
///
/// Returned instead of broadcast -- dependents learn about the new entry from
/// this value, not from an ambient event.
#[derive(Debug, Clone, PartialEq)]
pub struct LogOutcome {
    /// Profile with the post-entry weight applied (height untouched)
    pub profile: UserProfile,
    /// The entry to append to the log store
    pub entry: LogEntry,
}

/// Record an exercise session against a profile, timestamped now.
///
/// Calories burnt are derived from duration at a fixed intensity
/// (`duration_minutes * 8`, rounded to 2 decimals); the implied weight loss is
/// `calories_burnt / 7700` kg. Negative or non-finite durations are
/// normalized to zero rather than rejected, keeping the calorie invariant
/// (`calories_burnt >= 0`) unconditional.
///
/// # Errors
///
/// Returns [`fitlog_core::ErrorCode::MissingProfileData`] if the profile has
/// no weight or no height; the profile is not touched in that case.
pub fn record_exercise(
    profile: &UserProfile,
    activity: &str,
    duration_minutes: f64,
) -> AppResult<LogOutcome> {
    record_exercise_at(profile, activity, duration_minutes, Utc::now())
}

/// [`record_exercise`] with an explicit timestamp, the deterministic seam the
/// public operation and the tests share.
///
/// # Errors
///
/// Same as [`record_exercise`].
pub fn record_exercise_at(
    profile: &UserProfile,
    activity: &str,
    duration_minutes: f64,
    timestamp: DateTime<Utc>,
) -> AppResult<LogOutcome> {
    let (weight_kg, height_cm) = require_measurements(profile)?;

    let duration_minutes = sanitize_non_negative(duration_minutes);
    let calories_burnt = round2(duration_minutes * EXERCISE_KCAL_PER_MINUTE);
    let weight_delta = round2(calories_burnt / KCAL_PER_KG_BODY_MASS);
    let new_weight = round2(weight_kg - weight_delta);
    let bmi_after = bmi_for(new_weight, height_cm);
    debug!(activity, calories_burnt, new_weight, "exercise recorded");

    let mut updated = profile.clone();
    updated.weight_kg = Some(new_weight);

    Ok(LogOutcome {
        profile: updated,
        entry: LogEntry::Exercise {
            activity: activity.to_owned(),
            duration_minutes,
            calories_burnt,
            bmi_after,
            timestamp,
        },
    })
}

/// Record a meal against a profile, timestamped now.
///
/// The implied weight gain is `calories_intake / 7700` kg. Negative or
/// non-finite intake is treated as zero.
///
/// # Errors
///
/// Returns [`fitlog_core::ErrorCode::MissingProfileData`] if the profile has
/// no weight or no height; the profile is not touched in that case.
pub fn record_meal(profile: &UserProfile, name: &str, calories_intake: f64) -> AppResult<LogOutcome> {
    record_meal_at(profile, name, calories_intake, Utc::now())
}

/// [`record_meal`] with an explicit timestamp.
///
/// # Errors
///
/// Same as [`record_meal`].
pub fn record_meal_at(
    profile: &UserProfile,
    name: &str,
    calories_intake: f64,
    timestamp: DateTime<Utc>,
) -> AppResult<LogOutcome> {
    let (weight_kg, height_cm) = require_measurements(profile)?;

    let calories_intake = sanitize_non_negative(calories_intake);
    let weight_delta = round2(calories_intake / KCAL_PER_KG_BODY_MASS);
    let new_weight = round2(weight_kg + weight_delta);
    let bmi_after = bmi_for(new_weight, height_cm);
    debug!(name, calories_intake, new_weight, "meal recorded");

    let mut updated = profile.clone();
    updated.weight_kg = Some(new_weight);

    Ok(LogOutcome {
        profile: updated,
        entry: LogEntry::Meal {
            name: name.to_owned(),
            calories_intake,
            bmi_after,
            timestamp,
        },
    })
}

fn require_measurements(profile: &UserProfile) -> AppResult<(f64, f64)> {
    match (profile.weight_kg, profile.height_cm) {
        (Some(weight), Some(height)) => Ok((weight, height)),
        _ => Err(AppError::missing_profile_data(&profile.username)),
    }
}

/// Lenient numeric normalization: NaN, infinities, and negatives become zero
fn sanitize_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn bmi_for(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round2(weight_kg / (height_m * height_m))
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> UserProfile {
        UserProfile::with_measurements("alice", 70.0, 170.0)
    }

    #[test]
    fn test_exercise_thirty_minutes() {
        let outcome = record_exercise(&baseline(), "Running", 30.0).unwrap();

        assert_eq!(outcome.profile.weight_kg, Some(69.97));
        match outcome.entry {
            LogEntry::Exercise {
                calories_burnt,
                bmi_after,
                ..
            } => {
                assert!((calories_burnt - 240.0).abs() < f64::EPSILON);
                assert!((bmi_after - 24.21).abs() < f64::EPSILON);
            }
            LogEntry::Meal { .. } => panic!("expected exercise entry"),
        }
    }

    #[test]
    fn test_meal_five_hundred_calories() {
        let outcome = record_meal(&baseline(), "Lunch", 500.0).unwrap();

        assert_eq!(outcome.profile.weight_kg, Some(70.06));
        match outcome.entry {
            LogEntry::Meal { bmi_after, .. } => {
                assert!((bmi_after - 24.24).abs() < f64::EPSILON);
            }
            LogEntry::Exercise { .. } => panic!("expected meal entry"),
        }
    }

    #[test]
    fn test_calories_formula_is_exact() {
        for minutes in [0.0, 1.0, 12.5, 45.0, 90.0] {
            let outcome = record_exercise(&baseline(), "Rowing", minutes).unwrap();
            match outcome.entry {
                LogEntry::Exercise { calories_burnt, .. } => {
                    assert!((calories_burnt - round2(minutes * 8.0)).abs() < f64::EPSILON);
                }
                LogEntry::Meal { .. } => panic!("expected exercise entry"),
            }
        }
    }

    #[test]
    fn test_missing_height_blocks_recording() {
        let mut profile = baseline();
        profile.height_cm = None;

        let err = record_exercise(&profile, "Running", 30.0).unwrap_err();
        assert_eq!(err.code, fitlog_core::ErrorCode::MissingProfileData);
        // Caller's profile is untouched
        assert_eq!(profile.weight_kg, Some(70.0));

        let err = record_meal(&profile, "Lunch", 500.0).unwrap_err();
        assert_eq!(err.code, fitlog_core::ErrorCode::MissingProfileData);
    }

    #[test]
    fn test_negative_and_nan_input_normalized_to_zero() {
        let outcome = record_exercise(&baseline(), "Running", -10.0).unwrap();
        assert_eq!(outcome.profile.weight_kg, Some(70.0));

        let outcome = record_meal(&baseline(), "Lunch", f64::NAN).unwrap();
        assert_eq!(outcome.profile.weight_kg, Some(70.0));
        match outcome.entry {
            LogEntry::Meal {
                calories_intake, ..
            } => assert!((calories_intake).abs() < f64::EPSILON),
            LogEntry::Exercise { .. } => panic!("expected meal entry"),
        }
    }

    #[test]
    fn test_offsetting_entries_round_trip_weight() {
        // Burn 100 kcal, then eat 100 kcal: weight returns to baseline.
        let profile = baseline();
        let after_exercise = record_exercise(&profile, "Rowing", 12.5).unwrap();
        let after_meal = record_meal(&after_exercise.profile, "Snack", 100.0).unwrap();

        assert_eq!(after_meal.profile.weight_kg, Some(70.0));
    }

    #[test]
    fn test_height_never_mutated() {
        let outcome = record_meal(&baseline(), "Dinner", 900.0).unwrap();
        assert_eq!(outcome.profile.height_cm, Some(170.0));
        assert_eq!(outcome.profile.username, "alice");
    }
}
