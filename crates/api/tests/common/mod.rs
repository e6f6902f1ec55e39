#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use charcat_api::config::ServerConfig;
use charcat_api::router::build_app_router;
use charcat_api::state::AppState;
use charcat_db::JsonStore;

/// Build a test `ServerConfig` with safe defaults pointing at `data_file`.
pub fn test_config(data_file: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_file,
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// A router wired to a data file inside its own temp directory.
///
/// Keep the struct alive for the duration of the test; dropping it removes
/// the directory.
pub struct TestApp {
    pub router: Router,
    pub store: JsonStore,
    pub dir: TempDir,
}

impl TestApp {
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    pub fn data_file(&self) -> PathBuf {
        self.store.path().to_path_buf()
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over an empty, not yet created data file.
pub fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    build_test_app_in(dir)
}

/// Like [`build_test_app`] but over a data file pre-filled with `contents`.
pub fn build_test_app_with_file(contents: &str) -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("characters.json"), contents).expect("seed data file");
    build_test_app_in(dir)
}

/// Like [`build_test_app`] but with the request timeout set to `secs`.
pub fn build_test_app_with_timeout(secs: u64) -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut config = test_config(dir.path().join("characters.json"));
    config.request_timeout_secs = secs;
    build_test_app_from(dir, config)
}

fn build_test_app_in(dir: TempDir) -> TestApp {
    let config = test_config(dir.path().join("characters.json"));
    build_test_app_from(dir, config)
}

fn build_test_app_from(dir: TempDir, config: ServerConfig) -> TestApp {
    let store = JsonStore::open(&config.data_file);
    let state = AppState {
        store: store.clone(),
    };
    TestApp {
        router: build_app_router(state, &config),
        store,
        dir,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

/// Collect a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body is UTF-8")
}
