// ABOUTME: Main server binary - wires config, logging, storage, and routes
// ABOUTME: Serves the Fitlog REST API over HTTP until interrupted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog

//! Fitlog server entry point.
//!
//! Configuration comes from the environment; the flags below override
//! individual values for local runs:
//!
//! ```bash
//! cargo run --bin fitlog-server
//! cargo run --bin fitlog-server -- --port 8080 --database-url sqlite:./dev.db
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use fitlog_server::config::ServerConfig;
use fitlog_server::database::Database;
use fitlog_server::logging::LoggingConfig;
use fitlog_server::resources::ServerResources;
use fitlog_server::routes;
use fitlog_server::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fitlog-server",
    about = "Fitlog REST backend",
    long_about = "REST backend persisting fitness/nutrition profiles and logs and serving derived insights"
)]
struct Args {
    /// Bind address override
    #[arg(long)]
    host: Option<String>,

    /// HTTP port override
    #[arg(long)]
    port: Option<u16>,

    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    LoggingConfig::from_env().init()?;

    let args = Args::parse();
    let mut config = ServerConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(database_url) = args.database_url {
        config.database_url = database_url;
    }

    let database = Database::new(&config.database_url).await?;
    info!(database_url = %config.database_url, "database ready");

    let storage: Arc<dyn Storage> = Arc::new(database);
    let resources = Arc::new(ServerResources::new(storage, config.clone()));
    let app = routes::router(resources);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(address = %config.bind_address(), "fitlog-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("fitlog-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to install shutdown handler: {e}");
    }
}
