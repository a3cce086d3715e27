//! Model training endpoint

use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::trainer::TrainingReport;
use crate::AppState;
use payroll_common::db::employees;

/// POST /api/ml/train
///
/// Snapshots the store and hands it to the training collaborator. Any
/// trainer failure surfaces as a generic server error.
pub async fn train_models(State(state): State<AppState>) -> ApiResult<Json<TrainingReport>> {
    let snapshot = employees::fetch_all(&state.db).await?;

    let report = state
        .trainer
        .train(&snapshot)
        .map_err(|e| ApiError::Internal(format!("Training failed: {}", e)))?;

    info!("Training completed over {} records", report.trained_records);
    Ok(Json(report))
}
