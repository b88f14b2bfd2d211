//! Entry point for the `sensorflow-api` binary.
//!
//! Startup sequence:
//! - Initialize structured logging (stderr)
//! - Load `.env`, then configuration from the environment
//! - Print the startup notice on stdout
//! - Bind `[::]:<PORT>` (all interfaces) and serve until the listener fails
//!
//! Any failure is written to stderr and the process exits with status 1.
//!
//! # Environment Variables
//! - `PORT` (optional) – listen port (default: 8080)
//! - `AXUM_LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `AXUM_SPAN_EVENTS` (optional) – span event mode for tracing
use std::process;

use anyhow::Result;
use dotenvy::dotenv;

use sensorflow_api::{config, server, telemetry};

// ---

#[tokio::main]
async fn main() {
    // ---
    if let Err(e) = run().await {
        eprintln!("server error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    // ---
    telemetry::init_tracing();
    dotenv().ok();

    let cfg = config::load_from_env()?;

    println!("Server listening on :{}", cfg.port);

    server::run(cfg).await?;

    Ok(())
}
