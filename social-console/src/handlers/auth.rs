use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::session::{LOGGED_IN_KEY, USERNAME_KEY};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

const LOGIN_PAGE: &str = "<!DOCTYPE html><html><head><title>Sign in</title></head>\
    <body><h1>Sign in</h1>\
    <form method=\"post\" action=\"/login\">\
    <input name=\"username\" placeholder=\"Username\" autocomplete=\"username\">\
    <input name=\"password\" type=\"password\" placeholder=\"Password\" autocomplete=\"current-password\">\
    <button type=\"submit\">Sign in</button>\
    </form></body></html>";

pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}

/// Verifies the submitted credentials against the stored record and marks
/// the session on success. Any mismatch gets the same generic error.
pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<LoginRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    if state
        .credentials
        .verify(&payload.username, &payload.password)
        .await?
    {
        session
            .insert(LOGGED_IN_KEY, true)
            .await
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("session error: {}", e)))?;
        session
            .insert(USERNAME_KEY, &payload.username)
            .await
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("session error: {}", e)))?;

        tracing::info!(username = %payload.username, "admin logged in");
        Ok(Json(json!({ "success": true })))
    } else {
        tracing::warn!(username = %payload.username, "login rejected");
        Ok(Json(json!({ "success": false, "error": "Invalid credentials" })))
    }
}

pub async fn logout_handler(session: Session) -> Redirect {
    session.clear().await;
    Redirect::to("/login")
}
