use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// Session key set on successful login and checked by the session gate.
pub const LOGGED_IN_KEY: &str = "logged_in";
/// Session key holding the logged-in admin's username.
pub const USERNAME_KEY: &str = "username";

/// Logged-in admin context extracted from the session.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await.map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to extract session",
            )
                .into_response()
        })?;

        let logged_in: bool = session
            .get(LOGGED_IN_KEY)
            .await
            .unwrap_or(None)
            .unwrap_or(false);

        if !logged_in {
            return Err(Redirect::to("/login").into_response());
        }

        let username: String = session
            .get(USERNAME_KEY)
            .await
            .unwrap_or(None)
            .unwrap_or_default();

        Ok(AdminUser { username })
    }
}
