/// API integration tests
/// Tests complete HTTP request/response cycles with a real database
mod common;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use common::create_test_database;
use moody_server::{
    create_router,
    error::{Result as ServerResult, ServerError},
    services::{MediaStore, StoredMedia},
    state::AppState,
};
use moody_storage::SqlitePool;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tower::util::ServiceExt;

/// In-process media store for tests
///
/// Hands out predictable file ids and URLs, records deletes, and can be
/// told to fail either operation.
#[derive(Default)]
struct FakeMediaStore {
    counter: AtomicUsize,
    deleted: Mutex<Vec<String>>,
    fail_store: AtomicBool,
    fail_delete: AtomicBool,
}

impl FakeMediaStore {
    fn deleted_ids(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaStore for FakeMediaStore {
    async fn store(&self, _file_name: &str, _data: Vec<u8>) -> ServerResult<StoredMedia> {
        if self.fail_store.load(Ordering::SeqCst) {
            return Err(ServerError::MediaStore("store unavailable".to_string()));
        }
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(StoredMedia {
            file_id: format!("file-{n}"),
            url: format!("https://cdn.test/file-{n}.mp3"),
        })
    }

    async fn delete(&self, file_id: &str) -> ServerResult<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(ServerError::MediaStore("delete unavailable".to_string()));
        }
        self.deleted.lock().unwrap().push(file_id.to_string());
        Ok(())
    }
}

/// Helper to create a test app router
async fn create_test_app() -> (Router, Arc<FakeMediaStore>, SqlitePool, TempDir) {
    let (pool, temp_dir) = create_test_database().await.unwrap();

    let media_store = Arc::new(FakeMediaStore::default());
    let store: Arc<dyn MediaStore> = media_store.clone();
    let app_state = AppState::new(pool.clone(), store, 10 * 1024 * 1024);

    (create_router(app_state), media_store, pool, temp_dir)
}

/// Build a multipart/form-data body with text fields and an optional file
fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &[u8])>,
) -> (String, Vec<u8>) {
    let boundary = "test-boundary-7MA4YWxkTrZu0gW";
    let mut body: Vec<u8> = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((filename, data)) = file {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"audio\"; filename=\"{filename}\"\r\nContent-Type: audio/mpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    (
        format!("multipart/form-data; boundary={boundary}"),
        body,
    )
}

fn upload_request(title: &str, artist: &str, mood: &str) -> Request<Body> {
    let (content_type, body) = multipart_body(
        &[("title", title), ("artist", artist), ("mood", mood)],
        Some(("song.mp3", b"fake mp3 bytes")),
    );

    Request::builder()
        .uri("/songs")
        .method("POST")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _, _pool, _temp_dir) = create_test_app().await;

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_upload_and_query_by_mood() {
    let (app, _, _pool, _temp_dir) = create_test_app().await;

    // Upload one happy and one sad song
    let response = app
        .clone()
        .oneshot(upload_request("Sunny Day", "The Brights", "happy"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Song uploaded successfully");
    assert_eq!(body["song"]["title"], "Sunny Day");
    assert_eq!(body["song"]["mood"], "happy");
    assert_eq!(body["song"]["audioUrl"], "https://cdn.test/file-0.mp3");
    assert!(body["song"]["id"].is_string());

    let response = app
        .clone()
        .oneshot(upload_request("Rainy Night", "The Glooms", "sad"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Query only the happy songs
    let request = Request::builder()
        .uri("/songs?mood=happy")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let songs = body["songs"].as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["title"], "Sunny Day");

    // Query without a mood returns everything
    let request = Request::builder()
        .uri("/songs")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["songs"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_mood_returns_empty_list() {
    let (app, _, _pool, _temp_dir) = create_test_app().await;

    let request = Request::builder()
        .uri("/songs?mood=bewildered")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["songs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_missing_mood_field_is_rejected() {
    let (app, media_store, _pool, _temp_dir) = create_test_app().await;

    let (content_type, body) = multipart_body(
        &[("title", "Sunny Day"), ("artist", "The Brights")],
        Some(("song.mp3", b"fake mp3 bytes")),
    );
    let request = Request::builder()
        .uri("/songs")
        .method("POST")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing required field: mood");

    // Validation failed before anything was stored
    assert_eq!(media_store.counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_upload_missing_audio_file_is_rejected() {
    let (app, _, _pool, _temp_dir) = create_test_app().await;

    let (content_type, body) = multipart_body(
        &[
            ("title", "Sunny Day"),
            ("artist", "The Brights"),
            ("mood", "happy"),
        ],
        None,
    );
    let request = Request::builder()
        .uri("/songs")
        .method("POST")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Missing audio file");
}

#[tokio::test]
async fn test_upload_without_multipart_content_type_is_rejected() {
    let (app, _, _pool, _temp_dir) = create_test_app().await;

    let request = Request::builder()
        .uri("/songs")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_oversized_upload_is_rejected() {
    let (pool, _temp_dir) = create_test_database().await.unwrap();
    let media_store = Arc::new(FakeMediaStore::default());
    let store: Arc<dyn MediaStore> = media_store.clone();
    // 16 byte limit
    let app_state = AppState::new(pool, store, 16);
    let app = create_router(app_state);

    let (content_type, body) = multipart_body(
        &[
            ("title", "Sunny Day"),
            ("artist", "The Brights"),
            ("mood", "happy"),
        ],
        Some(("song.mp3", &[0u8; 64])),
    );
    let request = Request::builder()
        .uri("/songs")
        .method("POST")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "File too large");
    assert_eq!(media_store.counter.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_media_store_failure_is_surfaced() {
    let (app, media_store, _pool, _temp_dir) = create_test_app().await;
    media_store.fail_store.store(true, Ordering::SeqCst);

    let response = app
        .oneshot(upload_request("Sunny Day", "The Brights", "happy"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Media store error");
}

#[tokio::test]
async fn test_metadata_failure_deletes_stored_file() {
    let (app, media_store, pool, _temp_dir) = create_test_app().await;

    // Force the metadata write to fail after the file is stored
    sqlx_drop_songs_table(&pool).await;

    let response = app
        .oneshot(upload_request("Sunny Day", "The Brights", "happy"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Database error");

    // The compensating delete removed the just-stored file
    assert_eq!(media_store.deleted_ids(), vec!["file-0".to_string()]);
}

#[tokio::test]
async fn test_failed_cleanup_reports_partial_upload() {
    let (app, media_store, pool, _temp_dir) = create_test_app().await;

    sqlx_drop_songs_table(&pool).await;
    media_store.fail_delete.store(true, Ordering::SeqCst);

    let response = app
        .oneshot(upload_request("Sunny Day", "The Brights", "happy"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(
        body["error"],
        "Upload partially completed: stored file could not be cleaned up"
    );
    assert!(media_store.deleted_ids().is_empty());
}

async fn sqlx_drop_songs_table(pool: &SqlitePool) {
    sqlx::query("DROP TABLE songs").execute(pool).await.unwrap();
}
