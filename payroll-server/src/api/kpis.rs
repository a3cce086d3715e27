//! Payroll KPI aggregation endpoint

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::ApiResult;
use crate::AppState;
use payroll_common::db::employees;

/// GET /api/kpis response
#[derive(Debug, Serialize)]
pub struct KpiResponse {
    pub total_employees: i64,
    pub total_payroll_cost: f64,
    pub avg_salary: f64,
}

/// GET /api/kpis
///
/// Count, payroll sum and average salary over the whole store, read in one
/// statement so the numbers come from a single snapshot. Average is 0 for
/// an empty store; monetary values are rounded to two decimals.
pub async fn get_kpis(State(state): State<AppState>) -> ApiResult<Json<KpiResponse>> {
    let totals = employees::payroll_totals(&state.db).await?;

    let avg_salary = if totals.employees > 0 {
        totals.payroll / totals.employees as f64
    } else {
        0.0
    };

    Ok(Json(KpiResponse {
        total_employees: totals.employees,
        total_payroll_cost: round2(totals.payroll),
        avg_salary: round2(avg_salary),
    }))
}

/// Round to two decimal places for presentation
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(2000.2166666), 2000.22);
        assert_eq!(round2(2000.214), 2000.21);
        assert_eq!(round2(0.005), 0.01);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(5000.0), 5000.0);
    }
}
