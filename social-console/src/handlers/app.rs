use axum::response::{Html, IntoResponse, Redirect};

use crate::models::AdminUser;

pub async fn index() -> Redirect {
    Redirect::to("/login")
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// Protected landing view. The console's real UI is served elsewhere;
/// this page only confirms the session.
pub async fn dashboard(admin: AdminUser) -> impl IntoResponse {
    Html(format!(
        "<!DOCTYPE html><html><head><title>Dashboard</title></head>\
         <body><h1>Dashboard</h1><p>Signed in as {}. <a href=\"/logout\">Log out</a></p></body></html>",
        admin.username
    ))
}
