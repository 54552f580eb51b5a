use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::json;

use crate::error::AppError;
use crate::AppState;

/// Multipart field carrying the uploaded files.
const FILES_FIELD: &str = "files[]";

/// POST /api/upload — stage uploaded files temporarily.
///
/// Each file is handled independently: an empty filename or a read failure
/// skips that file without aborting the batch. Only a request with no
/// `files[]` field at all is reported as a failure (still HTTP 200).
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut saw_files_field = false;
    let mut staged = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some(FILES_FIELD) {
            continue;
        }
        saw_files_field = true;

        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(file = %original_name, "failed to read upload field: {}", e);
                continue;
            }
        };

        match state.staging.stage(&original_name, &bytes).await {
            Ok(Some(file)) => staged.push(file),
            Ok(None) => {}
            Err(e) => {
                tracing::error!(file = %original_name, "failed to stage upload: {}", e);
            }
        }
    }

    if !saw_files_field {
        return Ok(Json(json!({ "success": false, "error": "No files uploaded" })));
    }

    Ok(Json(json!({ "success": true, "files": staged })))
}
