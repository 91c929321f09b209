//! HTTP API end-to-end tests
//!
//! Drives the full router in-process:
//! - filtered listing with repeated trait parameters
//! - lookup by id, including the not-found path
//! - creation, validation failure and persistence failure

use animaldb::http_server::{HttpServer, HttpServerConfig, NOT_PROPERLY_FORMATTED};
use animaldb::record::AnimalRecord;
use animaldb::storage::MemoryMirror;
use animaldb::store::AnimalStore;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use tower::util::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

fn fig() -> AnimalRecord {
    AnimalRecord::new("0", "Fig", "chicken", "herbivore", vec!["happy".into()])
}

fn app_with(mirror: MemoryMirror) -> Router {
    let config = HttpServerConfig {
        public_dir: None,
        ..Default::default()
    };
    let store = AnimalStore::open(mirror).unwrap();
    HttpServer::with_store(config, store).router()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, body: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/animals")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn as_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

// =============================================================================
// Scenario
// =============================================================================

#[tokio::test]
async fn test_create_then_query_scenario() {
    let mirror = MemoryMirror::with_records(vec![fig()]);
    let app = app_with(mirror.clone());

    let (status, body) = post_json(
        &app,
        json!({
            "name": "Boo",
            "species": "goat",
            "diet": "omnivore",
            "personalityTraits": ["shy", "calm"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created = as_json(&body);
    assert_eq!(created["id"], "1");
    assert_eq!(created["name"], "Boo");

    let (status, body) = get(&app, "/api/animals?personalityTraits=shy&personalityTraits=calm").await;
    assert_eq!(status, StatusCode::OK);
    let listed = as_json(&body);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], "1");

    let (status, body) = get(&app, "/api/animals/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body), created);

    let (status, _) = get(&app, "/api/animals/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = post_json(&app, json!({"name": "Bad"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, NOT_PROPERLY_FORMATTED.as_bytes());

    let (_, body) = get(&app, "/api/animals").await;
    assert_eq!(as_json(&body).as_array().unwrap().len(), 2);
    assert_eq!(mirror.snapshot().len(), 2);
}

// =============================================================================
// Read Path
// =============================================================================

#[tokio::test]
async fn test_list_without_query_returns_all_in_order() {
    let boo = AnimalRecord::new("1", "Boo", "goat", "omnivore", vec!["shy".into()]);
    let app = app_with(MemoryMirror::with_records(vec![fig(), boo]));

    let (status, body) = get(&app, "/api/animals").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<String> = as_json(&body)
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["0", "1"]);
}

#[tokio::test]
async fn test_scalar_filters_and_unknown_params() {
    let boo = AnimalRecord::new("1", "Boo", "goat", "omnivore", vec!["shy".into()]);
    let app = app_with(MemoryMirror::with_records(vec![fig(), boo]));

    let (_, body) = get(&app, "/api/animals?diet=herbivore&color=red").await;
    let listed = as_json(&body);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Fig");

    let (_, body) = get(&app, "/api/animals?species=goat&name=Fig").await;
    assert!(as_json(&body).as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_bracketed_trait_params() {
    let boo = AnimalRecord::new("1", "Boo", "goat", "omnivore", vec!["shy".into(), "calm".into()]);
    let app = app_with(MemoryMirror::with_records(vec![fig(), boo]));

    let (_, body) = get(
        &app,
        "/api/animals?personalityTraits%5B%5D=calm&personalityTraits%5B%5D=shy",
    )
    .await;
    let listed = as_json(&body);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "Boo");
}

#[tokio::test]
async fn test_repeated_scalar_params_must_all_match() {
    let boo = AnimalRecord::new("1", "Boo", "goat", "omnivore", vec!["shy".into()]);
    let app = app_with(MemoryMirror::with_records(vec![fig(), boo]));

    let (status, body) = get(&app, "/api/animals?diet=herbivore&diet=omnivore").await;
    assert_eq!(status, StatusCode::OK);
    assert!(as_json(&body).as_array().unwrap().is_empty());

    let (_, body) = get(&app, "/api/animals?diet=omnivore&diet=omnivore").await;
    let listed = as_json(&body);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], "1");
}

#[tokio::test]
async fn test_empty_trait_param_returns_everything() {
    let boo = AnimalRecord::new("1", "Boo", "goat", "omnivore", vec!["shy".into()]);
    let app = app_with(MemoryMirror::with_records(vec![fig(), boo]));

    let (status, body) = get(&app, "/api/animals?personalityTraits=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body).as_array().unwrap().len(), 2);
}

// =============================================================================
// Write Path
// =============================================================================

#[tokio::test]
async fn test_rejected_post_leaves_store_and_mirror_untouched() {
    let mirror = MemoryMirror::with_records(vec![fig()]);
    let app = app_with(mirror.clone());

    let (status, body) = post_json(
        &app,
        json!({"name": "Boo", "species": "goat", "personalityTraits": []}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, NOT_PROPERLY_FORMATTED.as_bytes());
    assert_eq!(mirror.save_count(), 0);

    let (status, body) = post_json(
        &app,
        json!({"name": "Boo", "species": "goat", "diet": "omnivore", "personalityTraits": []}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body)["id"], "1");
}

#[tokio::test]
async fn test_empty_body_is_not_properly_formatted() {
    let app = app_with(MemoryMirror::new());
    let request = Request::builder()
        .method("POST")
        .uri("/api/animals")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, NOT_PROPERLY_FORMATTED.as_bytes());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = app_with(MemoryMirror::new());
    let request = Request::builder()
        .method("POST")
        .uri("/api/animals")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();

    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_persistence_failure_is_server_error_and_rolled_back() {
    let mirror = MemoryMirror::with_records(vec![fig()]);
    let app = app_with(mirror.clone());
    mirror.fail_saves(true);

    let (status, body) = post_json(
        &app,
        json!({"name": "Boo", "species": "goat", "diet": "omnivore", "personalityTraits": []}),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(as_json(&body)["code"], 500);

    let (_, body) = get(&app, "/api/animals").await;
    assert_eq!(as_json(&body).as_array().unwrap().len(), 1);
    let (status, _) = get(&app, "/api/animals/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Ambient Endpoints
// =============================================================================

#[tokio::test]
async fn test_unknown_page_serves_index_with_ok() {
    let public = TempDir::new().unwrap();
    fs::write(public.path().join("index.html"), "<h1>Zoo</h1>").unwrap();

    let config = HttpServerConfig {
        public_dir: Some(public.path().to_path_buf()),
        ..Default::default()
    };
    let store = AnimalStore::open(MemoryMirror::new()).unwrap();
    let app = HttpServer::with_store(config, store).router();

    let (status, body) = get(&app, "/no/such/page").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Zoo</h1>");

    let (status, _) = get(&app, "/api/animals").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_with(MemoryMirror::new());
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(as_json(&body)["status"], "ok");
}
