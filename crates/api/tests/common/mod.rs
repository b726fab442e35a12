#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use innkeep_api::config::ServerConfig;
use innkeep_api::routes;
use innkeep_api::state::AppState;
use innkeep_store::{RecordStore, UploadStore};

/// Multipart boundary used by the request builders below.
pub const BOUNDARY: &str = "innkeep-test-boundary";

/// A fully wired application over temporary storage directories.
///
/// Holds the [`TempDir`] so the backing directories live as long as the test.
pub struct TestApp {
    pub app: Router,
    pub records: Arc<RecordStore>,
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
    _root: TempDir,
}

/// Build a test `ServerConfig` over the given storage roots.
pub fn test_config(data_dir: PathBuf, upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_dir,
        upload_dir,
    }
}

/// Build the full application router with all middleware layers over fresh
/// temporary data and upload directories.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery, static uploads) that production uses.
pub fn spawn_app() -> TestApp {
    let root = TempDir::new().expect("failed to create temp dir");
    let data_dir = root.path().join("data");
    let upload_dir = root.path().join("uploads");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::create_dir_all(&upload_dir).unwrap();

    let config = test_config(data_dir.clone(), upload_dir.clone());
    let records = Arc::new(RecordStore::new(&data_dir));
    let uploads = Arc::new(UploadStore::new(&upload_dir));

    let state = AppState {
        records: Arc::clone(&records),
        uploads,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    let app = Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .nest_service("/uploads", ServeDir::new(&upload_dir))
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state);

    TestApp {
        app,
        records,
        data_dir,
        upload_dir,
        _root: root,
    }
}

/// Send a GET request.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a POST with a JSON body.
pub async fn post_json(app: &Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, json).await
}

/// Send a PUT with a JSON body.
pub async fn put_json(app: &Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, json).await
}

async fn json_request(
    app: &Router,
    method: Method,
    uri: &str,
    json: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a POST with a multipart body containing the given `image` file
/// fields, in order.
pub async fn post_images(app: &Router, uri: &str, files: &[(&str, &[u8])]) -> Response<Body> {
    let parts: Vec<(&str, &str, &[u8])> = files
        .iter()
        .map(|(name, data)| ("image", *name, *data))
        .collect();
    post_multipart(app, uri, &parts).await
}

/// Send a POST with an arbitrary multipart body. Each part is
/// `(field_name, file_name, content)`.
pub async fn post_multipart(
    app: &Router,
    uri: &str,
    parts: &[(&str, &str, &[u8])],
) -> Response<Body> {
    let mut body = Vec::new();
    for (field, filename, data) in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

/// A creation payload with every field populated.
pub fn sample_hotel_body() -> serde_json::Value {
    serde_json::json!({
        "title": "Sunset Lodge",
        "description": "A quiet place on the shore",
        "guestCount": 4,
        "bedroomCount": 2,
        "bathroomCount": 1,
        "amenities": ["wifi", "parking"],
        "hostInfo": { "name": "Mina", "email": "mina@example.com" },
        "address": "1 Shore Rd",
        "latitude": 51.5,
        "longitude": -0.1,
        "rooms": [
            { "roomSlug": "sea-view", "roomTitle": "Sea View", "bedroomCount": 1 }
        ]
    })
}

/// Create a hotel through the API and return its id.
pub async fn create_hotel(app: &Router) -> String {
    let response = post_json(app, "/hotel", sample_hotel_body()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["hotel"]["hotelId"].as_str().unwrap().to_string()
}
