//! Employee listing endpoint

use axum::extract::State;
use axum::Json;

use crate::error::ApiResult;
use crate::AppState;
use payroll_common::db::employees;
use payroll_common::models::EmployeeSummary;

/// GET /api/employees
///
/// Full-table scan in store order, projected to the reduced public shape;
/// demographic and performance fields are not exposed.
pub async fn list_employees(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EmployeeSummary>>> {
    let records = employees::fetch_all(&state.db).await?;
    Ok(Json(records.into_iter().map(EmployeeSummary::from).collect()))
}
