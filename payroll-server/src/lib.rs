//! payroll-server library - Payroll Analytics API
//!
//! HTTP backend over the employee payroll store: dataset ingestion
//! (CSV/XLSX), KPI aggregation, employee listing, and the model training
//! hook.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod etl;
pub mod trainer;

use trainer::TrainingHook;

/// Upload size cap for dataset files
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Model training collaborator
    pub trainer: Arc<dyn TrainingHook>,
}

impl AppState {
    /// Create state with the default baseline trainer
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            trainer: Arc::new(trainer::BaselineTrainer),
        }
    }

    /// Create state with a custom training collaborator
    pub fn with_trainer(db: SqlitePool, trainer: Arc<dyn TrainingHook>) -> Self {
        Self { db, trainer }
    }
}

/// Build application router
///
/// CORS is fully permissive: the API is consumed cross-origin by the
/// analytics frontend.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/api/health", get(api::health_check))
        .route("/api/kpis", get(api::get_kpis))
        .route("/api/employees", get(api::list_employees))
        .route("/api/etl/upload", post(api::upload_dataset))
        .route("/api/ml/train", post(api::train_models))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
