//! Test helper module for social-console integration tests.
//!
//! Builds the full router against throwaway data/staging directories and
//! provides request helpers that carry the session cookie.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use secrecy::Secret;
use social_console::config::AdminSettings;
use social_console::services::{metrics, ClientRepo, CredentialStore, MockPublisher, StagingArea};
use social_console::startup::build_router;
use social_console::AppState;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "admin123";

pub struct TestApp {
    pub router: Router,
    pub staging_dir: PathBuf,
    pub data_dir: PathBuf,
    // TempDirs are removed on drop; keep them alive for the test's duration.
    _data: TempDir,
    _staging: TempDir,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_seed(None).await
}

/// Builds the full router against throwaway data and staging directories.
/// A seed pins the mock publisher's outcomes.
pub async fn spawn_app_with_seed(seed: Option<u64>) -> TestApp {
    metrics::init_metrics();

    let data = TempDir::new().expect("Failed to create data tempdir");
    let staging = TempDir::new().expect("Failed to create staging tempdir");
    let data_dir = data.path().to_path_buf();
    let staging_dir = staging.path().to_path_buf();

    let admin = AdminSettings {
        username: TEST_USERNAME.to_string(),
        password: Secret::new(TEST_PASSWORD.to_string()),
    };

    let credentials = CredentialStore::open(&data_dir, &admin)
        .await
        .expect("Failed to open credential store");
    let clients = ClientRepo::open(&data_dir)
        .await
        .expect("Failed to open client repo");
    let staging_area = StagingArea::open(&staging_dir)
        .await
        .expect("Failed to open staging area");
    let publisher = match seed {
        Some(seed) => MockPublisher::with_seed(seed),
        None => MockPublisher::new(),
    };

    let state = AppState::new(
        Arc::new(credentials),
        Arc::new(clients),
        Arc::new(staging_area),
        Arc::new(publisher),
    );

    TestApp {
        router: build_router(state, 24),
        staging_dir,
        data_dir,
        _data: data,
        _staging: staging,
    }
}

/// Logs in with the test credentials and returns the session cookie to
/// attach to subsequent requests.
pub async fn login(router: &Router) -> String {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!(
                    "username={}&password={}",
                    TEST_USERNAME, TEST_PASSWORD
                )))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login should set a session cookie")
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// GET helper carrying the session cookie.
pub async fn get_with_session(router: &Router, uri: &str, cookie: &str) -> axum::response::Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// POST helper sending a JSON body with the session cookie.
pub async fn post_json_with_session(
    router: &Router,
    uri: &str,
    cookie: &str,
    body: serde_json::Value,
) -> axum::response::Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::COOKIE, cookie)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// One part of a `files[]` multipart request.
pub struct FilePart {
    pub field: &'static str,
    pub filename: &'static str,
    pub bytes: &'static [u8],
}

pub const MULTIPART_BOUNDARY: &str = "----social-console-test-boundary";

/// Hand-assembled multipart body; enough for the upload handler's needs.
pub fn multipart_body(parts: &[FilePart]) -> String {
    let mut body = String::new();
    for part in parts {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n",
            MULTIPART_BOUNDARY, part.field, part.filename
        ));
        body.push_str(std::str::from_utf8(part.bytes).unwrap());
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{}--\r\n", MULTIPART_BOUNDARY));
    body
}

pub async fn post_multipart_with_session(
    router: &Router,
    uri: &str,
    cookie: &str,
    parts: &[FilePart],
) -> axum::response::Response {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::COOKIE, cookie)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
                )
                .body(Body::from(multipart_body(parts)))
                .unwrap(),
        )
        .await
        .unwrap()
}
