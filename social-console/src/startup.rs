use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::handlers::{
    app::{dashboard, health_check, index},
    auth::{login_handler, login_page, logout_handler},
    clients::{create_client, list_clients},
    publish::publish_handler,
    upload::upload_handler,
};
use crate::middleware::auth::session_gate;
use crate::middleware::metrics::metrics_middleware;
use crate::middleware::tracing::request_id_middleware;
use crate::AppState;

pub fn build_router(state: AppState, session_expiry_hours: i64) -> Router {
    // Session setup: server-side store, marker cookie only
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_expiry(Expiry::OnInactivity(Duration::hours(session_expiry_hours)));

    let api = Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route("/upload", post(upload_handler))
        .route("/post", post(publish_handler))
        .layer(from_fn(session_gate));

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(crate::handlers::metrics::metrics))
        .route("/login", get(login_page).post(login_handler))
        .route("/logout", get(logout_handler))
        .route("/dashboard", get(dashboard).layer(from_fn(session_gate)))
        .nest("/api", api)
        .layer(session_layer)
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
