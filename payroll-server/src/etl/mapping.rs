//! Column mapping from parsed tables to staged employee records
//!
//! The recognized source columns and their per-field policies, declared in
//! one place:
//!
//! | source column (trimmed) | target field   | absent / empty | present but invalid |
//! |-------------------------|----------------|----------------|---------------------|
//! | EmployeeID              | employee_id    | NULL           | -                   |
//! | Name                    | name           | NULL           | -                   |
//! | Department              | department     | NULL           | -                   |
//! | MonthlyIncome           | monthly_income | 0.0            | reject the upload   |
//!
//! Unrecognized columns are ignored.

use super::{Cell, EtlError, Table};
use payroll_common::models::NewEmployee;

const COL_EMPLOYEE_ID: &str = "EmployeeID";
const COL_NAME: &str = "Name";
const COL_DEPARTMENT: &str = "Department";
const COL_MONTHLY_INCOME: &str = "MonthlyIncome";

/// Map every data row of a parsed table into staged employee records.
///
/// There is no row-level rejection: a row with nothing recognizable still
/// stages a record. A present-but-invalid MonthlyIncome value fails the
/// whole mapping, naming the data row (1-indexed, header excluded).
pub fn map_rows(table: &Table) -> Result<Vec<NewEmployee>, EtlError> {
    let employee_id_col = table.column(COL_EMPLOYEE_ID);
    let name_col = table.column(COL_NAME);
    let department_col = table.column(COL_DEPARTMENT);
    let income_col = table.column(COL_MONTHLY_INCOME);

    let mut records = Vec::with_capacity(table.rows.len());
    for (index, row) in table.rows.iter().enumerate() {
        records.push(NewEmployee {
            employee_id: string_field(row, employee_id_col),
            name: string_field(row, name_col),
            department: string_field(row, department_col),
            monthly_income: income_field(row, income_col, index + 1)?,
        });
    }

    Ok(records)
}

fn cell_at(row: &[Cell], col: Option<usize>) -> &Cell {
    col.and_then(|i| row.get(i)).unwrap_or(&Cell::Empty)
}

/// String fields: absent column or empty cell maps to NULL
fn string_field(row: &[Cell], col: Option<usize>) -> Option<String> {
    match cell_at(row, col) {
        Cell::Empty => None,
        Cell::Text(s) => Some(s.clone()),
        Cell::Number(n) => Some(render_number(*n)),
        Cell::Bool(b) => Some(b.to_string()),
    }
}

/// MonthlyIncome: absent column or empty cell defaults to 0.0; a present
/// value must parse as a finite, non-negative number
fn income_field(row: &[Cell], col: Option<usize>, row_number: usize) -> Result<f64, EtlError> {
    let value = match cell_at(row, col) {
        Cell::Empty => 0.0,
        Cell::Number(n) => *n,
        Cell::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            EtlError::MalformedInput(format!(
                "Row {}: MonthlyIncome value {:?} is not a number",
                row_number, s
            ))
        })?,
        Cell::Bool(_) => {
            return Err(EtlError::MalformedInput(format!(
                "Row {}: MonthlyIncome must be numeric, got a boolean",
                row_number
            )))
        }
    };

    if !value.is_finite() || value < 0.0 {
        return Err(EtlError::MalformedInput(format!(
            "Row {}: MonthlyIncome must be a non-negative amount, got {}",
            row_number, value
        )));
    }

    Ok(value)
}

/// Spreadsheet numbers destined for text fields: integral values render
/// without the trailing ".0"
fn render_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: Vec<Vec<Cell>>) -> Table {
        Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn maps_recognized_columns() {
        let table = table(
            &["EmployeeID", "Name", "Department", "MonthlyIncome"],
            vec![vec![text("E1"), text("Alice"), text("Eng"), text("5000")]],
        );

        let records = map_rows(&table).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].employee_id.as_deref(), Some("E1"));
        assert_eq!(records[0].name.as_deref(), Some("Alice"));
        assert_eq!(records[0].department.as_deref(), Some("Eng"));
        assert_eq!(records[0].monthly_income, 5000.0);
    }

    #[test]
    fn unrecognized_columns_are_ignored() {
        let table = table(
            &["EmployeeID", "FavoriteColor"],
            vec![vec![text("E1"), text("teal")]],
        );

        let records = map_rows(&table).unwrap();
        assert_eq!(records[0].employee_id.as_deref(), Some("E1"));
        assert_eq!(records[0].name, None);
    }

    #[test]
    fn missing_columns_map_to_defaults() {
        let table = table(&["Name"], vec![vec![text("Alice")]]);

        let records = map_rows(&table).unwrap();
        assert_eq!(records[0].employee_id, None);
        assert_eq!(records[0].department, None);
        assert_eq!(records[0].monthly_income, 0.0);
    }

    #[test]
    fn empty_income_cell_defaults_to_zero() {
        let table = table(
            &["EmployeeID", "MonthlyIncome"],
            vec![vec![text("E1"), Cell::Empty]],
        );

        let records = map_rows(&table).unwrap();
        assert_eq!(records[0].monthly_income, 0.0);
    }

    #[test]
    fn short_rows_read_as_empty_cells() {
        let table = table(
            &["EmployeeID", "Name", "MonthlyIncome"],
            vec![vec![text("E1")]],
        );

        let records = map_rows(&table).unwrap();
        assert_eq!(records[0].name, None);
        assert_eq!(records[0].monthly_income, 0.0);
    }

    #[test]
    fn numeric_income_cell_is_taken_verbatim() {
        let table = table(
            &["MonthlyIncome"],
            vec![vec![Cell::Number(6500.5)]],
        );

        assert_eq!(map_rows(&table).unwrap()[0].monthly_income, 6500.5);
    }

    #[test]
    fn unparsable_income_names_the_row() {
        let table = table(
            &["MonthlyIncome"],
            vec![vec![text("5000")], vec![text("lots")]],
        );

        let err = map_rows(&table).unwrap_err();
        match err {
            EtlError::MalformedInput(msg) => {
                assert!(msg.contains("Row 2"));
                assert!(msg.contains("lots"));
            }
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn negative_income_is_rejected() {
        let table = table(&["MonthlyIncome"], vec![vec![text("-10")]]);
        assert!(matches!(
            map_rows(&table).unwrap_err(),
            EtlError::MalformedInput(_)
        ));
    }

    #[test]
    fn fully_empty_row_still_stages_a_record() {
        let table = table(
            &["EmployeeID", "Name"],
            vec![vec![Cell::Empty, Cell::Empty]],
        );

        let records = map_rows(&table).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], NewEmployee::default());
    }

    #[test]
    fn numeric_cells_render_into_text_fields() {
        let table = table(
            &["EmployeeID", "Name"],
            vec![vec![Cell::Number(1042.0), Cell::Number(3.5)]],
        );

        let records = map_rows(&table).unwrap();
        assert_eq!(records[0].employee_id.as_deref(), Some("1042"));
        assert_eq!(records[0].name.as_deref(), Some("3.5"));
    }
}
