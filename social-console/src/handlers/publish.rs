use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::{AdminUser, PostReceipt};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PostRequest {
    /// Accepted as an opaque reference; not checked against the repository.
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub media_files: Vec<MediaFileRef>,
}

/// Reference to a previously staged upload. Callers usually echo back the
/// whole upload response entry; extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct MediaFileRef {
    pub temp_name: String,
}

/// POST /api/post — fabricate per-platform results, then consume the
/// referenced staged files no matter how the individual posts went.
pub async fn publish_handler(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<PostRequest>,
) -> Result<Json<PostReceipt>, AppError> {
    let results = state.publisher.publish(&payload.platforms).await;

    for media in &payload.media_files {
        state.staging.discard(&media.temp_name).await?;
    }

    tracing::info!(
        client_id = %payload.client_id,
        platforms = payload.platforms.len(),
        media_files = payload.media_files.len(),
        admin = %admin.username,
        "mock publish completed"
    );

    Ok(Json(PostReceipt {
        success: true,
        results,
        timestamp: Utc::now(),
    }))
}
