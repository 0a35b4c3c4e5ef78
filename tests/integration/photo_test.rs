//! Integration tests for photo upload, retrieval, and listing.
//!
//! These need a running PostgreSQL, so they are ignored by default; run
//! with `cargo test -- --ignored`.

use bytes::Bytes;
use http::StatusCode;
use uuid::Uuid;

use photostore_core::error::ErrorKind;
use photostore_entity::photo::model::NewPhoto;

use crate::helpers::{self, TestApp};

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_upload_roundtrip_byte_identical() {
    let app = TestApp::new().await;
    let png = helpers::generate_png();

    let response = app.upload("img.png", "image/png", &png).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let body = response.json();
    let data = body.get("data").unwrap();
    assert_eq!(data["filename"], "img.png");
    assert_eq!(data["size_bytes"], png.len() as u64);
    let id = data["id"].as_str().unwrap().to_string();
    Uuid::parse_str(&id).expect("returned id was not a UUID");

    // Metadata by id
    let response = app.get(&format!("/api/photos/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["data"]["filename"], "img.png");
    assert_eq!(body["data"]["size_bytes"], png.len() as u64);

    // Raw bytes, exactly as stored
    let response = app.get(&format!("/api/photos/{id}/download")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers["content-type"], "image/png");
    assert_eq!(
        response.headers["content-disposition"],
        "attachment; filename=\"img.png\""
    );
    assert_eq!(
        response.headers["content-length"],
        png.len().to_string().as_str()
    );
    assert_eq!(response.bytes, png);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_listing_returns_metadata_without_content() {
    let app = TestApp::new().await;
    let png = helpers::generate_png();
    app.upload("img.png", "image/png", &png).await;

    let response = app.get("/api/photos").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);

    let item = &items[0];
    assert_eq!(item["filename"], "img.png");
    assert_eq!(item["size_bytes"], png.len() as u64);
    assert!(item.get("id").is_some());
    assert!(item.get("content").is_none());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_empty_store_lists_empty() {
    let app = TestApp::new().await;

    let response = app.get("/api/photos").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_invalid_id_is_validation_error() {
    let app = TestApp::new().await;

    let response = app.get("/api/photos/not-a-uuid").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "VALIDATION_ERROR");

    let response = app.get("/api/photos/not-a-uuid/download").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_absent_id_is_not_found() {
    let app = TestApp::new().await;

    let response = app.get(&format!("/api/photos/{}", Uuid::new_v4())).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["error"], "NOT_FOUND");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_duplicate_id_yields_conflict_not_overwrite() {
    let app = TestApp::new().await;
    let id = Uuid::new_v4();

    let first = NewPhoto::with_id(
        id,
        "first.png".to_string(),
        None,
        Bytes::from_static(b"first content"),
    )
    .unwrap();
    app.repo.insert(&first).await.expect("first insert failed");

    let second = NewPhoto::with_id(
        id,
        "second.png".to_string(),
        None,
        Bytes::from_static(b"second content"),
    )
    .unwrap();
    let err = app.repo.insert(&second).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);

    // The original row is untouched
    let stored = app.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.filename, "first.png");
    assert_eq!(stored.content, b"first content");
    assert_eq!(app.repo.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_listing_preserves_insertion_order() {
    let app = TestApp::new().await;
    for name in ["a.png", "b.png", "c.png"] {
        let response = app.upload(name, "image/png", b"bytes").await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let body = app.get("/api/photos").await.json();
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["filename"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["a.png", "b.png", "c.png"]);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_download_with_quote_in_filename() {
    let app = TestApp::new().await;
    let id = Uuid::new_v4();

    let photo = NewPhoto::with_id(
        id,
        "a\"b.png".to_string(),
        Some("image/png".to_string()),
        Bytes::from_static(b"bytes"),
    )
    .unwrap();
    app.repo.insert(&photo).await.expect("insert failed");

    let response = app.get(&format!("/api/photos/{id}/download")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers["content-disposition"],
        "attachment; filename=\"a\\\"b.png\""
    );
    assert_eq!(response.bytes, b"bytes");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_download_with_non_ascii_filename() {
    let app = TestApp::new().await;
    let id = Uuid::new_v4();

    let photo = NewPhoto::with_id(
        id,
        "å.png".to_string(),
        Some("image/png".to_string()),
        Bytes::from_static(b"bytes"),
    )
    .unwrap();
    app.repo.insert(&photo).await.expect("insert failed");

    let response = app.get(&format!("/api/photos/{id}/download")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers["content-disposition"],
        "attachment; filename=\"_.png\"; filename*=UTF-8''%C3%A5.png"
    );
    assert_eq!(response.bytes, b"bytes");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_oversized_upload_rejected() {
    let app = TestApp::with_max_upload(Some(16)).await;

    let response = app.upload("big.png", "image/png", &[0u8; 64]).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "VALIDATION_ERROR");

    // Nothing was stored
    assert_eq!(app.repo.list_all().await.unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_overlong_filename_rejected() {
    let app = TestApp::new().await;

    let filename = "a".repeat(251);
    let response = app.upload(&filename, "image/png", b"bytes").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "VALIDATION_ERROR");

    // Nothing was stored
    assert_eq!(app.repo.list_all().await.unwrap().len(), 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_upload_without_file_field_rejected() {
    let app = TestApp::new().await;

    let request = http::Request::builder()
        .method("POST")
        .uri("/api/photos")
        .header(
            http::header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", helpers::BOUNDARY),
        )
        .body(axum::body::Body::from(format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nx\r\n--{b}--\r\n",
            b = helpers::BOUNDARY
        )))
        .unwrap();
    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_health_reports_database_connected() {
    let app = TestApp::new().await;

    let response = app.get("/api/health").await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["database"], "connected");
}
