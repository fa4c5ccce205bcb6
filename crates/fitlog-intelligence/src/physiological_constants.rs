// ABOUTME: Fixed physiological constants behind the aggregation math
// ABOUTME: Energy equivalence, exercise intensity, BMI cutoffs, balance bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Physiological constants used throughout the aggregation engine.
//!
//! These values are fixed domain constants, not tunables: the series math and
//! the stored history both depend on them, so changing one silently reshapes
//! every previously derived trajectory.

/// Energy/mass equivalence used to project weight change from calorie balance
///
/// References:
/// - Wishnofsky, M. (1958). Caloric equivalents of gained or lost weight.
///   *American Journal of Clinical Nutrition*, 6(5), 542-546.
pub mod energy {
    /// Kilocalories per kilogram of body mass (the classic 7700 kcal ≈ 1 kg rule)
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

    /// Assumed energy expenditure per minute of logged exercise (kcal/min).
    ///
    /// A single fixed moderate-intensity rate; logged sessions carry no
    /// heart-rate or power data to refine it with.
    pub const EXERCISE_KCAL_PER_MINUTE: f64 = 8.0;
}

/// BMI classification cutoffs
///
/// References:
/// - World Health Organization (2000). Obesity: preventing and managing the
///   global epidemic. WHO Technical Report Series 894.
pub mod bmi {
    /// Below this value a BMI is classified as underweight
    pub const UNDERWEIGHT_THRESHOLD: f64 = 18.5;

    /// At or above this value a BMI is classified as overweight
    pub const OVERWEIGHT_THRESHOLD: f64 = 25.0;
}

/// Calorie-balance bands driving intake/activity advice
pub mod calorie_balance {
    /// Net surplus (kcal) above which intake-reduction advice is issued
    pub const SURPLUS_THRESHOLD_KCAL: f64 = 500.0;

    /// Net deficit (kcal) below which intake-increase advice is issued
    pub const DEFICIT_THRESHOLD_KCAL: f64 = -500.0;
}
