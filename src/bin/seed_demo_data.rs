// ABOUTME: Demo data seeder for the Fitlog backend
// ABOUTME: Creates the demo profile, a bearer token, and optional sample logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Demo data seeder.
//!
//! Populates the database with the demo profile (70 kg / 170 cm) and an
//! opaque bearer token so the API is exercisable immediately:
//!
//! ```bash
//! cargo run --bin seed-demo-data
//! cargo run --bin seed-demo-data -- --username alice --with-sample-logs
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;
use uuid::Uuid;

use fitlog_core::errors::ErrorCode;
use fitlog_core::models::{LogRecord, UserProfile};
use fitlog_intelligence::aggregator;
use fitlog_server::config::ServerConfig;
use fitlog_server::database::Database;
use fitlog_server::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "Fitlog demo data seeder",
    long_about = "Populate the database with a demo profile, bearer token, and optional sample logs"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Username to seed
    #[arg(long, default_value = "User")]
    username: String,

    /// Baseline weight in kilograms
    #[arg(long, default_value_t = 70.0)]
    weight_kg: f64,

    /// Baseline height in centimeters
    #[arg(long, default_value_t = 170.0)]
    height_cm: f64,

    /// Also record a small exercise/meal history through the aggregator
    #[arg(long)]
    with_sample_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    LoggingConfig::from_env().init()?;

    let args = SeedArgs::parse();
    let database_url = args
        .database_url
        .unwrap_or_else(|| ServerConfig::from_env().database_url);

    let database = Database::new(&database_url).await?;

    let profile = UserProfile::with_measurements(&args.username, args.weight_kg, args.height_cm);
    match database.create_profile(&profile).await {
        Ok(()) => info!(username = %args.username, "seeded profile"),
        Err(e) if e.code == ErrorCode::ResourceAlreadyExists => {
            info!(username = %args.username, "profile already present, leaving it untouched");
        }
        Err(e) => return Err(e.into()),
    }

    let token = Uuid::new_v4().simple().to_string();
    database.insert_token(&token, &args.username).await?;

    if args.with_sample_logs {
        seed_sample_logs(&database, &args.username).await?;
    }

    println!("bearer token for '{}': {token}", args.username);
    Ok(())
}

/// Record one exercise and one meal the same way the POST route does:
/// aggregator first, then profile update, then append.
async fn seed_sample_logs(database: &Database, username: &str) -> Result<()> {
    let profile = database
        .get_profile(username)
        .await?
        .ok_or_else(|| anyhow::anyhow!("seeded profile vanished"))?;

    let exercise = aggregator::record_exercise(&profile, "Running", 30.0)?;
    persist_outcome(database, username, &exercise).await?;

    let meal = aggregator::record_meal(&exercise.profile, "Lunch", 500.0)?;
    persist_outcome(database, username, &meal).await?;

    info!(username = %username, "seeded sample logs");
    Ok(())
}

async fn persist_outcome(
    database: &Database,
    username: &str,
    outcome: &aggregator::LogOutcome,
) -> Result<()> {
    if let (Some(weight), Some(height)) = (outcome.profile.weight_kg, outcome.profile.height_cm) {
        database.set_profile(username, weight, height).await?;
    }
    let record = LogRecord::new(username, outcome.entry.clone());
    database.append_log(&record).await?;
    Ok(())
}
