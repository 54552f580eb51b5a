use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::session::LOGGED_IN_KEY;

/// Session gate for protected routes: without the login marker the
/// request never reaches the handler and the caller is sent to the
/// login flow instead.
pub async fn session_gate(
    session: Session,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let logged_in: bool = session
        .get(LOGGED_IN_KEY)
        .await
        .unwrap_or(None)
        .unwrap_or(false);

    if !logged_in {
        return Ok(Redirect::to("/login").into_response());
    }

    Ok(next.run(request).await)
}
