//! Payroll Analytics API - Main entry point
//!
//! HTTP backend over the employee payroll store: dataset ingestion
//! (CSV/XLSX), KPI aggregation, employee listing, and the model training
//! hook. State lives in a single-file SQLite database whose schema is
//! created on startup and whose pool is closed on shutdown.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{error, info};

use payroll_server::{build_router, AppState};

/// Command-line arguments for payroll-server
#[derive(Parser, Debug)]
#[command(name = "payroll-server")]
#[command(about = "Payroll analytics HTTP backend")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "PAYROLL_PORT")]
    port: u16,

    /// Path to the SQLite database file (overrides PAYROLL_DATABASE and the
    /// config file)
    #[arg(short, long)]
    database: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Payroll Analytics API (payroll-server) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = Args::parse();

    let db_path = payroll_common::config::resolve_database_path(args.database.as_deref());
    info!("Database path: {}", db_path.display());

    let pool = match payroll_common::db::init_database(&db_path).await {
        Ok(pool) => {
            info!("✓ Database initialized");
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };

    // Create application state and router
    let state = AppState::new(pool.clone());
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("payroll-server listening on http://{}", addr);
    info!("Health check: http://{}/api/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Dispose the store before exit
    pool.close().await;
    info!("Database pool closed, shutting down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
