//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use photostore_entity::photo::model::{Photo, PhotoSummary};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Photo metadata for responses. Never carries content; downloads use the
/// raw-bytes endpoint instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoResponse {
    /// Photo ID.
    pub id: Uuid,
    /// Original filename.
    pub filename: String,
    /// Original content type, if one was supplied at upload.
    pub mime_type: Option<String>,
    /// Content size in bytes.
    pub size_bytes: i64,
    /// Insertion time.
    pub created_at: DateTime<Utc>,
}

impl From<&Photo> for PhotoResponse {
    fn from(photo: &Photo) -> Self {
        Self {
            id: photo.id,
            filename: photo.filename.clone(),
            mime_type: photo.mime_type.clone(),
            size_bytes: photo.size_bytes,
            created_at: photo.created_at,
        }
    }
}

impl From<PhotoSummary> for PhotoResponse {
    fn from(summary: PhotoSummary) -> Self {
        Self {
            id: summary.id,
            filename: summary.filename,
            mime_type: summary.mime_type,
            size_bytes: summary.size_bytes,
            created_at: summary.created_at,
        }
    }
}

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Database connectivity: `"connected"` or `"unavailable"`.
    pub database: String,
    /// Crate version.
    pub version: String,
}
