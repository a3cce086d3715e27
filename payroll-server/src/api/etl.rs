//! Dataset upload endpoint

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::etl::{self, mapping};
use crate::AppState;
use payroll_common::db::employees;

/// POST /api/etl/upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub status: String,
    pub rows_inserted: u64,
}

/// POST /api/etl/upload
///
/// Multipart upload of a CSV or XLSX dataset. Parses the file, maps the
/// recognized columns into staged records, and commits every row in a
/// single transaction; a failed commit leaves the store untouched.
pub async fn upload_dataset(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let (filename, bytes) = read_upload(&mut multipart).await?;

    let table = etl::parse_dataset(&filename, &bytes)?;
    let records = mapping::map_rows(&table)?;
    let rows_inserted = employees::insert_batch(&state.db, &records).await?;

    info!("Ingested {} rows from {}", rows_inserted, filename);

    Ok(Json(UploadResponse {
        status: "success".to_string(),
        rows_inserted,
    }))
}

/// Pull the first multipart part that carries a filename
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;
        return Ok((filename, bytes.to_vec()));
    }

    Err(ApiError::BadRequest(
        "No file in multipart body".to_string(),
    ))
}
