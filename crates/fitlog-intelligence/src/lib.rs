// ABOUTME: Log aggregation and recommendation engine for the Fitlog platform
// ABOUTME: Pure, synchronous computation over profiles and ordered log histories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

#![deny(unsafe_code)]

//! # Fitlog Intelligence
//!
//! The aggregation engine behind the tracker: given a baseline profile and an
//! ordered log history, it derives net-calorie series, running weight/BMI
//! trajectories, and textual recommendations.
//!
//! Every function here is a pure, synchronous computation over
//! already-fetched inputs. There is no internal concurrency, no shared
//! mutable state, and no I/O; calling any operation twice with identical
//! inputs yields identical output. Sequencing an append against a recompute
//! is the caller's responsibility.
//!
//! ## Modules
//!
//! - **aggregator**: `record_exercise` / `record_meal` mutating-step calculations
//! - **series**: net-calorie and cumulative weight/BMI projections
//! - **recommendation_engine**: BMI and calorie-balance advice
//! - **physiological_constants**: the fixed domain constants behind the math

/// Record-step calculations for new exercise and meal entries
pub mod aggregator;

/// Fixed physiological constants used by the aggregation math
pub mod physiological_constants;

/// Recommendation generation from aggregated totals
pub mod recommendation_engine;

/// Net-calorie and cumulative weight/BMI series projection
pub mod series;

pub use aggregator::{record_exercise, record_meal, LogOutcome};
pub use recommendation_engine::{recommend, BmiCategory, CalorieBalanceAdvice, RecommendationReport};
pub use series::{build_series, project, AggregateSeries, CalorieTotals, SeriesPoint};
