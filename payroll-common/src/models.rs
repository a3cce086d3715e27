//! Employee data model

use serde::{Deserialize, Serialize};

/// One persisted employee row.
///
/// The demographic and performance columns exist in the schema but are not
/// populated by the ingestion path; they stay NULL until written by an
/// administrative tool.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    /// Primary key (UUID v4 string), assigned at insert and never changed
    pub id: String,
    /// Business-facing employee identifier, unique when present
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub department: Option<String>,
    pub job_role: Option<String>,
    pub monthly_income: f64,
    pub years_at_company: Option<i64>,
    pub overtime: bool,
    pub attrition: bool,
    pub performance_rating: Option<i64>,
}

/// A record staged for insertion; the primary key is assigned by the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEmployee {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub monthly_income: f64,
}

/// Reduced public projection returned by the employee listing
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: String,
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub department: Option<String>,
    pub monthly_income: f64,
}

impl From<Employee> for EmployeeSummary {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            employee_id: e.employee_id,
            name: e.name,
            department: e.department,
            monthly_income: e.monthly_income,
        }
    }
}
