//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are driven through `tower::ServiceExt::oneshot` against the
//! full production router, so every test exercises the real middleware
//! stack (CORS, request ID, timeout, tracing, panic recovery).

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use degreepath_api::config::{DatabaseConfig, ServerConfig};
use degreepath_api::router::build_app_router;
use degreepath_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            name: Some("degreepath_test".to_string()),
            user: Some("postgres".to_string()),
            password: Some("postgres".to_string()),
            url_override: None,
        },
        env_file_loaded: false,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a program row directly, returning its id.
pub async fn seed_program(pool: &PgPool, school: &str, program: &str, degree: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO programs (school_name, program_name, degree_type)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(school)
    .bind(program)
    .bind(degree)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a course row directly, returning its id.
pub async fn seed_course(pool: &PgPool, program_id: i64, code: &str, title: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO courses (program_id, code, title, credits, offered_terms, prerequisites)
         VALUES ($1, $2, $3, 3, $4, $5)
         RETURNING id",
    )
    .bind(program_id)
    .bind(code)
    .bind(title)
    .bind(vec!["Fall".to_string(), "Spring".to_string()])
    .bind(Vec::<String>::new())
    .fetch_one(pool)
    .await
    .unwrap()
}
