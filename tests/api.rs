//! HTTP-level tests driving the router directly with `oneshot` requests.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use orbital::config::EngineConfig;
use orbital::database::schema;
use orbital::web::{self, state::AppState};

async fn test_app() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    schema::init(&pool).await.unwrap();

    let state = AppState {
        pool: pool.clone(),
        engine: Arc::new(EngineConfig::default()),
    };
    (web::router(state), pool)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seed_profile(pool: &SqlitePool, user_id: &str, name: &str) {
    sqlx::query("INSERT INTO profiles (user_id, name, age, bio, pfp) VALUES (?1, ?2, 30, '', '')")
        .bind(user_id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
}

async fn seed_tag(pool: &SqlitePool, user_id: &str, tag: &str) {
    sqlx::query("INSERT INTO tags (user_id, tag) VALUES (?1, ?2)")
        .bind(user_id)
        .bind(tag)
        .execute(pool)
        .await
        .unwrap();
}

#[tokio::test]
async fn update_position_returns_ok() {
    let (app, _pool) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/location",
            json!({ "user_id": "a", "lat": 37.7749, "long": -122.4194 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["user_id"], "a");
    assert_eq!(body["encounters"], 0);
}

#[tokio::test]
async fn update_position_rejects_bad_coordinates() {
    let (app, _pool) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/location",
            json!({ "user_id": "a", "lat": 123.0, "long": 0.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("latitude"));
}

#[tokio::test]
async fn two_nearby_updates_register_one_encounter() {
    let (app, _pool) = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/location",
            json!({ "user_id": "b", "lat": 37.7749, "long": -122.4194 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post_json(
            "/location",
            json!({ "user_id": "a", "lat": 37.77495, "long": -122.4194 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["encounters"], 1);

    let response = app.oneshot(get("/users/a/encounters")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["user_id"], "a");
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn total_encounters_defaults_to_zero() {
    let (app, _pool) = test_app().await;

    let response = app.oneshot(get("/users/stranger/encounters")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["total"], 0);
}

#[tokio::test]
async fn interest_exchange_unlocks_chat_peers() {
    let (app, pool) = test_app().await;
    seed_profile(&pool, "a", "Alice").await;
    seed_profile(&pool, "b", "Bob").await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/interests",
            json!({ "from": "a", "to": "b", "disposition": "interested" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.clone().oneshot(get("/users/a/chat-peers")).await.unwrap();
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 0);

    let response = app
        .clone()
        .oneshot(post_json(
            "/interests",
            json!({ "from": "b", "to": "a", "disposition": "interested" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/users/a/chat-peers")).await.unwrap();
    let body = json_body(response).await;
    let peers = body.as_array().unwrap();
    assert_eq!(peers.len(), 1);
    assert_eq!(peers[0]["user_id"], "b");
    assert_eq!(peers[0]["name"], "Bob");
}

#[tokio::test]
async fn interests_reject_unknown_disposition() {
    let (app, _pool) = test_app().await;

    let response = app
        .oneshot(post_json(
            "/interests",
            json!({ "from": "a", "to": "b", "disposition": "maybe" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn matches_returns_ranked_profiles() {
    let (app, pool) = test_app().await;

    for (user, tag) in [
        ("a", "go"),
        ("a", "hiking"),
        ("b", "go"),
        ("c", "go"),
        ("c", "hiking"),
    ] {
        seed_tag(&pool, user, tag).await;
    }
    seed_profile(&pool, "b", "Bob").await;
    seed_profile(&pool, "c", "Cem").await;

    let response = app.oneshot(get("/users/a/matches")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let matches = body.as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["user_id"], "c");
    assert_eq!(matches[1]["user_id"], "b");
}

#[tokio::test]
async fn matches_empty_when_nothing_shared() {
    let (app, _pool) = test_app().await;

    let response = app.oneshot(get("/users/a/matches")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}
