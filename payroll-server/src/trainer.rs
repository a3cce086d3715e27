//! Model training hook
//!
//! The training algorithm is an external collaborator: it receives the full
//! employee snapshot and returns an opaque report. The shipped
//! implementation derives per-department income baselines so the wiring is
//! exercised end to end; a production trainer plugs in through the same
//! trait via `AppState::with_trainer`.

use chrono::Utc;
use payroll_common::models::Employee;
use serde::Serialize;
use std::collections::BTreeMap;

/// Collaborator interface for model training
pub trait TrainingHook: Send + Sync {
    fn train(&self, snapshot: &[Employee]) -> anyhow::Result<TrainingReport>;
}

/// Opaque result returned to the caller of POST /api/ml/train
#[derive(Debug, Serialize)]
pub struct TrainingReport {
    pub status: String,
    pub model: String,
    pub trained_records: usize,
    /// UTC time the artifacts were produced, RFC 3339
    pub trained_at: String,
    pub artifacts: serde_json::Value,
}

/// Baseline trainer: average monthly income per department
pub struct BaselineTrainer;

impl TrainingHook for BaselineTrainer {
    fn train(&self, snapshot: &[Employee]) -> anyhow::Result<TrainingReport> {
        let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        for employee in snapshot {
            let department = employee
                .department
                .clone()
                .unwrap_or_else(|| "unassigned".to_string());
            let entry = sums.entry(department).or_insert((0.0, 0));
            entry.0 += employee.monthly_income;
            entry.1 += 1;
        }

        let baselines: BTreeMap<String, f64> = sums
            .into_iter()
            .map(|(department, (sum, count))| (department, sum / count as f64))
            .collect();

        Ok(TrainingReport {
            status: "completed".to_string(),
            model: "department-income-baseline".to_string(),
            trained_records: snapshot.len(),
            trained_at: Utc::now().to_rfc3339(),
            artifacts: serde_json::json!({ "department_avg_income": baselines }),
        })
    }
}
