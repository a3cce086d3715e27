//! Employee table operations

use crate::models::{Employee, NewEmployee};
use crate::{Error, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Aggregate totals over the employee table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayrollTotals {
    pub employees: i64,
    pub payroll: f64,
}

/// Insert a batch of staged records in one transaction.
///
/// All-or-nothing: any failed insert rolls the whole batch back, so a
/// partially ingested upload is never visible to readers. Returns the
/// number of rows inserted.
pub async fn insert_batch(pool: &SqlitePool, records: &[NewEmployee]) -> Result<u64> {
    let mut tx = pool.begin().await?;

    for record in records {
        let id = Uuid::new_v4().to_string();
        sqlx::query(
            "INSERT INTO employees (id, employee_id, name, department, monthly_income) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&record.employee_id)
        .bind(&record.name)
        .bind(&record.department)
        .bind(record.monthly_income)
        .execute(&mut *tx)
        .await
        .map_err(|e| classify_insert_error(e, record))?;
    }

    tx.commit().await?;
    Ok(records.len() as u64)
}

/// Distinguish a unique-constraint hit on employee_id from other failures
fn classify_insert_error(err: sqlx::Error, record: &NewEmployee) -> Error {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            let id = record.employee_id.clone().unwrap_or_default();
            return Error::DuplicateEmployee(id);
        }
    }
    Error::Database(err)
}

/// Fetch every employee in store (rowid) order
pub async fn fetch_all(pool: &SqlitePool) -> Result<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY rowid")
        .fetch_all(pool)
        .await?;
    Ok(employees)
}

/// Count and payroll sum in a single statement, so the KPI endpoint reads
/// one consistent snapshot of the table.
pub async fn payroll_totals(pool: &SqlitePool) -> Result<PayrollTotals> {
    let (employees, payroll): (i64, f64) =
        sqlx::query_as("SELECT COUNT(*), COALESCE(SUM(monthly_income), 0.0) FROM employees")
            .fetch_one(pool)
            .await?;
    Ok(PayrollTotals { employees, payroll })
}
