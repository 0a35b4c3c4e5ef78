//! Photo upload, listing, metadata, and download handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use bytes::Bytes;

use photostore_core::error::AppError;

use crate::dto::response::{ApiResponse, PhotoResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/photos — multipart upload with a single `file` field.
pub async fn upload_photo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<PhotoResponse>>), ApiError> {
    let mut filename: Option<String> = None;
    let mut mime_type: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                filename = field.file_name().map(String::from);
                mime_type = field.content_type().map(String::from);
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            _ => {}
        }
    }

    let filename =
        filename.ok_or_else(|| AppError::validation("file field with a filename is required"))?;
    let data = data.ok_or_else(|| AppError::validation("file data is required"))?;

    let photo = state
        .photo_service
        .create_photo(filename, mime_type, data)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(PhotoResponse::from(&photo))),
    ))
}

/// GET /api/photos — metadata-only listing.
pub async fn list_photos(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PhotoResponse>>>, ApiError> {
    let photos = state.photo_service.list_photos().await?;
    Ok(Json(ApiResponse::ok(
        photos.into_iter().map(PhotoResponse::from).collect(),
    )))
}

/// GET /api/photos/{id} — metadata for one photo.
///
/// The id comes in as a raw string so a malformed value surfaces as our own
/// validation error, distinct from not-found.
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PhotoResponse>>, ApiError> {
    let photo = state.photo_service.get_photo(&id).await?;
    Ok(Json(ApiResponse::ok(PhotoResponse::from(&photo))))
}

/// GET /api/photos/{id}/download — the stored bytes, unmodified.
pub async fn download_photo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let photo = state.photo_service.get_photo(&id).await?;

    let content_type = photo
        .mime_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition(&photo.filename),
        )
        .header(header::CONTENT_LENGTH, photo.content.len())
        .body(Body::from(photo.content))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// Render a `Content-Disposition` value that is a valid header for any
/// stored filename.
///
/// Filenames only have their length validated at upload, so this must cope
/// with quotes, backslashes, control characters, and non-ASCII. The quoted
/// `filename` parameter carries an escaped ASCII rendition (non-ASCII and
/// control characters become `_`); when that rendition is lossy, an RFC 5987
/// `filename*` parameter carries the exact UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let mut fallback = String::with_capacity(filename.len());
    let mut lossless = true;
    for c in filename.chars() {
        match c {
            '"' | '\\' => {
                fallback.push('\\');
                fallback.push(c);
            }
            ' '..='~' => fallback.push(c),
            _ => {
                fallback.push('_');
                lossless = false;
            }
        }
    }

    if lossless {
        format!("attachment; filename=\"{fallback}\"")
    } else {
        format!(
            "attachment; filename=\"{fallback}\"; filename*=UTF-8''{}",
            percent_encode_ext_value(filename)
        )
    }
}

/// Percent-encode a string as an RFC 5987 `ext-value`: everything outside
/// the attr-char set becomes `%XX` over the UTF-8 bytes.
fn percent_encode_ext_value(s: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'!'
            | b'#'
            | b'$'
            | b'&'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~' => out.push(b as char),
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
    out
}
