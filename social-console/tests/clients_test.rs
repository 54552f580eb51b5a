mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use common::{get_with_session, login, post_json_with_session, read_json, spawn_app};
use serde_json::json;

fn assert_8_hex(id: &str) {
    assert_eq!(id.len(), 8, "client_id should be 8 chars: {id}");
    assert!(
        id.chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
        "client_id should be lowercase hex: {id}"
    );
}

#[tokio::test]
async fn creating_a_client_returns_the_persisted_record() {
    let app = spawn_app().await;
    let cookie = login(&app.router).await;

    let response = post_json_with_session(
        &app.router,
        "/api/clients",
        &cookie,
        json!({
            "name": "Acme Media",
            "email": "social@acme.test",
            "instagram_token": "ig-token",
            "youtube_token": "yt-token"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["success"], true);

    let client = &body["client"];
    assert_8_hex(client["client_id"].as_str().unwrap());
    assert_eq!(client["name"], "Acme Media");
    assert_eq!(client["email"], "social@acme.test");
    assert_eq!(client["tokens"]["instagram"], "ig-token");
    assert_eq!(client["tokens"]["youtube"], "yt-token");
    // Omitted tokens are persisted as empty strings, all four keys present.
    assert_eq!(client["tokens"]["facebook"], "");
    assert_eq!(client["tokens"]["linkedin"], "");
    assert!(chrono::DateTime::parse_from_rfc3339(client["created_at"].as_str().unwrap()).is_ok());

    // The record survives a fresh read of the collection.
    let response = get_with_session(&app.router, "/api/clients", &cookie).await;
    let listed = read_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["client_id"], client["client_id"].clone());
}

#[tokio::test]
async fn optional_fields_default_to_empty() {
    let app = spawn_app().await;
    let cookie = login(&app.router).await;

    let response =
        post_json_with_session(&app.router, "/api/clients", &cookie, json!({ "name": "Solo" }))
            .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["client"]["email"], "");
    assert_eq!(body["client"]["tokens"]["instagram"], "");
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let app = spawn_app().await;
    let cookie = login(&app.router).await;

    for name in ["first", "second", "third"] {
        let response =
            post_json_with_session(&app.router, "/api/clients", &cookie, json!({ "name": name }))
                .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_with_session(&app.router, "/api/clients", &cookie).await;
    let listed = read_json(response).await;

    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[tokio::test]
async fn client_ids_stay_unique_across_creations() {
    let app = spawn_app().await;
    let cookie = login(&app.router).await;

    let mut ids = HashSet::new();
    for i in 0..25 {
        let response = post_json_with_session(
            &app.router,
            "/api/clients",
            &cookie,
            json!({ "name": format!("client-{i}") }),
        )
        .await;
        let body = read_json(response).await;
        let id = body["client"]["client_id"].as_str().unwrap().to_string();
        assert_8_hex(&id);
        ids.insert(id);
    }

    assert_eq!(ids.len(), 25);
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let app = spawn_app().await;
    let cookie = login(&app.router).await;

    let response =
        post_json_with_session(&app.router, "/api/clients", &cookie, json!({ "name": "" })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
