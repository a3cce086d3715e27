//! Dataset ingestion: tabular file parsing
//!
//! Accepts an uploaded byte stream plus its declared filename and produces
//! a normalized table (trimmed headers + typed cells). The format is chosen
//! from the filename suffix alone: `.csv` or `.xlsx`.

pub mod mapping;

use calamine::{Data, Reader, Xlsx};
use std::io::Cursor;
use thiserror::Error;

/// Ingestion errors, surfaced as client errors at the request boundary
#[derive(Debug, Error)]
pub enum EtlError {
    /// Filename suffix is neither .csv nor .xlsx
    #[error("{0}")]
    UnsupportedFormat(String),

    /// Accepted format failed to decode or parse
    #[error("{0}")]
    MalformedInput(String),
}

/// One parsed cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

/// Parsed tabular file: trimmed headers plus data rows.
///
/// Rows may be shorter than the header list (ragged CSV input); readers
/// treat missing trailing cells as empty.
#[derive(Debug, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Position of a header, matched exactly after whitespace trim
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Parse an uploaded dataset, choosing the parser from the filename suffix
pub fn parse_dataset(filename: &str, bytes: &[u8]) -> Result<Table, EtlError> {
    if filename.ends_with(".csv") {
        parse_csv(bytes)
    } else if filename.ends_with(".xlsx") {
        parse_xlsx(bytes)
    } else {
        Err(EtlError::UnsupportedFormat(
            "Upload CSV or XLSX only".to_string(),
        ))
    }
}

/// Parse CSV bytes as strict UTF-8 text
fn parse_csv(bytes: &[u8]) -> Result<Table, EtlError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| EtlError::MalformedInput(format!("CSV is not valid UTF-8: {}", e)))?;

    if text.starts_with('\u{feff}') {
        return Err(EtlError::MalformedInput(
            "CSV begins with a UTF-8 byte order mark; re-export without a BOM".to_string(),
        ));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| EtlError::MalformedInput(format!("CSV header error: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| EtlError::MalformedInput(format!("CSV parse error: {}", e)))?;
        rows.push(record.iter().map(text_cell).collect());
    }

    Ok(Table { headers, rows })
}

fn text_cell(raw: &str) -> Cell {
    if raw.trim().is_empty() {
        Cell::Empty
    } else {
        Cell::Text(raw.to_string())
    }
}

/// Parse XLSX bytes; the first worksheet is the table, its first row the
/// header row
fn parse_xlsx(bytes: &[u8]) -> Result<Table, EtlError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| EtlError::MalformedInput(format!("XLSX open error: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| EtlError::MalformedInput("XLSX workbook has no worksheets".to_string()))?
        .map_err(|e| EtlError::MalformedInput(format!("XLSX read error: {}", e)))?;

    let mut sheet_rows = range.rows();
    let headers: Vec<String> = match sheet_rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect(),
        None => Vec::new(),
    };

    let rows = sheet_rows
        .map(|row| row.iter().map(sheet_cell).collect())
        .collect();

    Ok(Table { headers, rows })
}

fn sheet_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("{:?}", e)),
    }
}
