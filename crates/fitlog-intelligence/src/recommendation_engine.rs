// ABOUTME: Recommendation generation from aggregated calorie totals and BMI
// ABOUTME: Threshold-driven advice; pure function of the aggregated inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Recommendation generation over an aggregated history.
//!
//! Two independent assessments are produced: a BMI classification of the
//! projected current weight, and a calorie-balance band over the whole
//! history. Both are pure functions of the aggregated totals -- no side
//! effects, no I/O.

use fitlog_core::models::UserProfile;
use serde::{Deserialize, Serialize};

use crate::aggregator::round2;
use crate::physiological_constants::{
    bmi::{OVERWEIGHT_THRESHOLD, UNDERWEIGHT_THRESHOLD},
    calorie_balance::{DEFICIT_THRESHOLD_KCAL, SURPLUS_THRESHOLD_KCAL},
    energy::KCAL_PER_KG_BODY_MASS,
};
use crate::series::AggregateSeries;

/// Message returned when a history is empty or a BMI cannot be derived
pub const NO_DATA_MESSAGE: &str = "No data available for recommendations.";

/// BMI classification of the projected current weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    NormalRange,
    /// BMI at or above 25
    Overweight,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_THRESHOLD {
            Self::Underweight
        } else if bmi >= OVERWEIGHT_THRESHOLD {
            Self::Overweight
        } else {
            Self::NormalRange
        }
    }

    /// Advice text for this classification
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Underweight => "Consider increasing calorie intake with a balanced diet.",
            Self::NormalRange => "Keep up the good work!",
            Self::Overweight => {
                "Consider reducing calorie intake and increasing physical activity."
            }
        }
    }
}

/// Calorie-balance band over the aggregated history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieBalanceAdvice {
    /// Net surplus above the threshold
    ReduceIntake,
    /// Net deficit below the threshold
    IncreaseIntake,
    /// Balance within the tolerated band
    OnTrack,
}

impl CalorieBalanceAdvice {
    /// Classify a net calorie balance (intake minus burnt)
    #[must_use]
    pub fn from_balance(balance_kcal: f64) -> Self {
        if balance_kcal > SURPLUS_THRESHOLD_KCAL {
            Self::ReduceIntake
        } else if balance_kcal < DEFICIT_THRESHOLD_KCAL {
            Self::IncreaseIntake
        } else {
            Self::OnTrack
        }
    }

    /// Advice text for this band
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ReduceIntake => {
                "Consider reducing your calorie intake or increasing physical activity."
            }
            Self::IncreaseIntake => {
                "Consider increasing your calorie intake to maintain energy levels."
            }
            Self::OnTrack => "Your calorie balance is on track!",
        }
    }
}

/// Combined recommendation output for one user's aggregated history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// BMI projected from the baseline weight and the full calorie balance,
    /// rounded to 2 decimals; `None` when measurements are missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_bmi: Option<f64>,
    /// Classification of `current_bmi`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi_category: Option<BmiCategory>,
    /// BMI advice text (no-data message when no BMI could be derived)
    pub bmi_advice: String,
    /// Net calorie balance over the history (kcal)
    pub calorie_balance_kcal: f64,
    /// Calorie-balance advice text (no-data message for an empty history)
    pub balance_advice: String,
    /// Number of entries the report covers
    pub entries_analyzed: usize,
}

/// Produce recommendations for an aggregated history.
///
/// An empty history yields the no-data messages rather than an error, and a
/// profile without measurements degrades the BMI assessment to `None` while
/// the calorie-balance assessment still runs.
#[must_use]
pub fn recommend(profile: &UserProfile, series: &AggregateSeries) -> RecommendationReport {
    let balance_kcal = series.totals.balance_kcal();

    if series.is_empty() {
        return RecommendationReport {
            current_bmi: None,
            bmi_category: None,
            bmi_advice: NO_DATA_MESSAGE.to_owned(),
            calorie_balance_kcal: balance_kcal,
            balance_advice: NO_DATA_MESSAGE.to_owned(),
            entries_analyzed: 0,
        };
    }

    let current_bmi = projected_bmi(profile, balance_kcal);
    let bmi_category = current_bmi.map(BmiCategory::from_bmi);
    let bmi_advice = bmi_category.map_or_else(|| NO_DATA_MESSAGE.to_owned(), |c| c.advice().to_owned());

    let balance = CalorieBalanceAdvice::from_balance(balance_kcal);

    RecommendationReport {
        current_bmi,
        bmi_category,
        bmi_advice,
        calorie_balance_kcal: balance_kcal,
        balance_advice: balance.message().to_owned(),
        entries_analyzed: series.totals.entries,
    }
}

/// BMI of the baseline weight shifted by the full calorie balance
fn projected_bmi(profile: &UserProfile, balance_kcal: f64) -> Option<f64> {
    let baseline = profile.weight_kg?;
    let height_m = profile.height_cm? / 100.0;
    if height_m <= 0.0 {
        return None;
    }
    let projected_weight = baseline + balance_kcal / KCAL_PER_KG_BODY_MASS;
    Some(round2(projected_weight / (height_m * height_m)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::build_series;
    use chrono::Utc;
    use fitlog_core::models::LogEntry;

    fn exercise(calories_burnt: f64) -> LogEntry {
        LogEntry::Exercise {
            activity: "Running".into(),
            duration_minutes: calories_burnt / 8.0,
            calories_burnt,
            bmi_after: 0.0,
            timestamp: Utc::now(),
        }
    }

    fn meal(calories_intake: f64) -> LogEntry {
        LogEntry::Meal {
            name: "Meal".into(),
            calories_intake,
            bmi_after: 0.0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::NormalRange);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::NormalRange);
        // The overweight boundary is inclusive.
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    }

    #[test]
    fn test_balance_bands() {
        assert_eq!(
            CalorieBalanceAdvice::from_balance(500.0),
            CalorieBalanceAdvice::OnTrack
        );
        assert_eq!(
            CalorieBalanceAdvice::from_balance(500.01),
            CalorieBalanceAdvice::ReduceIntake
        );
        assert_eq!(
            CalorieBalanceAdvice::from_balance(-500.0),
            CalorieBalanceAdvice::OnTrack
        );
        assert_eq!(
            CalorieBalanceAdvice::from_balance(-500.01),
            CalorieBalanceAdvice::IncreaseIntake
        );
    }

    #[test]
    fn test_empty_history_reports_no_data() {
        let profile = UserProfile::with_measurements("alice", 70.0, 170.0);
        let series = build_series(&profile, &[]);
        let report = recommend(&profile, &series);

        assert_eq!(report.bmi_advice, NO_DATA_MESSAGE);
        assert_eq!(report.balance_advice, NO_DATA_MESSAGE);
        assert_eq!(report.current_bmi, None);
        assert_eq!(report.entries_analyzed, 0);
    }

    #[test]
    fn test_surplus_history_recommends_reducing_intake() {
        let profile = UserProfile::with_measurements("alice", 70.0, 170.0);
        let history = [meal(900.0), exercise(240.0)];
        let series = build_series(&profile, &history);
        let report = recommend(&profile, &series);

        assert!((report.calorie_balance_kcal - 660.0).abs() < f64::EPSILON);
        assert_eq!(report.balance_advice, CalorieBalanceAdvice::ReduceIntake.message());
        // 70 + 660/7700 = 70.0857 kg -> BMI 24.25
        assert_eq!(report.current_bmi, Some(24.25));
        assert_eq!(report.bmi_category, Some(BmiCategory::NormalRange));
    }

    #[test]
    fn test_missing_measurements_degrade_bmi_assessment_only() {
        let profile = UserProfile::new("bob");
        let history = [exercise(800.0)];
        let series = build_series(&profile, &history);
        let report = recommend(&profile, &series);

        assert_eq!(report.current_bmi, None);
        assert_eq!(report.bmi_advice, NO_DATA_MESSAGE);
        // Balance assessment still runs on the totals alone.
        assert_eq!(
            report.balance_advice,
            CalorieBalanceAdvice::IncreaseIntake.message()
        );
    }

    #[test]
    fn test_overweight_projection_triggers_reduction_advice() {
        let profile = UserProfile::with_measurements("carol", 72.2, 170.0);
        // 72.2/1.7^2 = 24.98 baseline; a heavy surplus pushes it over 25.
        let history = [meal(2000.0)];
        let series = build_series(&profile, &history);
        let report = recommend(&profile, &series);

        assert_eq!(report.bmi_category, Some(BmiCategory::Overweight));
        assert_eq!(report.bmi_advice, BmiCategory::Overweight.advice());
    }
}
