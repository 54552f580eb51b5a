use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;
use crate::models::{AdminUser, Client, PlatformTokens};
use crate::utils::ValidatedJson;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub instagram_token: Option<String>,
    #[serde(default)]
    pub facebook_token: Option<String>,
    #[serde(default)]
    pub linkedin_token: Option<String>,
    #[serde(default)]
    pub youtube_token: Option<String>,
}

/// GET /api/clients — the full collection, insertion order.
pub async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, AppError> {
    Ok(Json(state.clients.list().await?))
}

/// POST /api/clients — create and persist a new client profile.
pub async fn create_client(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(payload): ValidatedJson<CreateClientRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tokens = PlatformTokens {
        instagram: payload.instagram_token.unwrap_or_default(),
        facebook: payload.facebook_token.unwrap_or_default(),
        linkedin: payload.linkedin_token.unwrap_or_default(),
        youtube: payload.youtube_token.unwrap_or_default(),
    };

    let client = state
        .clients
        .create(payload.name, payload.email.unwrap_or_default(), tokens)
        .await?;

    tracing::info!(
        client_id = %client.client_id,
        admin = %admin.username,
        "client registered"
    );

    Ok(Json(json!({ "success": true, "client": client })))
}
