//! Photo service — upload validation, identifier assignment, retrieval.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};
use uuid::Uuid;

use photostore_core::config::UploadConfig;
use photostore_core::error::AppError;
use photostore_core::result::AppResult;
use photostore_database::repositories::photo::PhotoRepository;
use photostore_entity::photo::model::{NewPhoto, Photo, PhotoSummary};

/// Orchestrates photo persistence and retrieval.
///
/// Validation happens here, before any storage access, so a malformed
/// request never costs a database round-trip.
#[derive(Debug, Clone)]
pub struct PhotoService {
    /// Photo repository.
    repo: Arc<PhotoRepository>,
    /// Maximum accepted content size in bytes.
    max_size_bytes: u64,
}

impl PhotoService {
    /// Creates a new photo service.
    pub fn new(repo: Arc<PhotoRepository>, config: &UploadConfig) -> Self {
        Self {
            repo,
            max_size_bytes: config.max_size_bytes,
        }
    }

    /// Store an uploaded photo and return the full stored row.
    ///
    /// Generates the identifier, computes the size from the content, and
    /// inserts exactly one durable row. No retry on conflict; randomly
    /// generated v4 identifiers make collisions a caller-retryable anomaly,
    /// not an expected path.
    pub async fn create_photo(
        &self,
        filename: String,
        mime_type: Option<String>,
        content: Bytes,
    ) -> AppResult<Photo> {
        if content.len() as u64 > self.max_size_bytes {
            warn!(
                size_bytes = content.len(),
                max_size_bytes = self.max_size_bytes,
                "Rejected oversized upload"
            );
            return Err(AppError::validation(format!(
                "Photo exceeds maximum upload size of {} bytes",
                self.max_size_bytes
            )));
        }

        let photo = NewPhoto::new(filename, mime_type, content)
            .inspect_err(|e| warn!(error = %e, "Rejected invalid upload"))?;
        let stored = self.repo.insert(&photo).await?;

        info!(
            id = %stored.id,
            filename = %stored.filename,
            size_bytes = stored.size_bytes,
            "Photo stored"
        );
        Ok(stored)
    }

    /// List all photos as metadata-only summaries.
    pub async fn list_photos(&self) -> AppResult<Vec<PhotoSummary>> {
        self.repo.list_all().await
    }

    /// Fetch one photo by its string identifier, content included.
    ///
    /// A syntactically invalid identifier is a validation error; a
    /// well-formed identifier with no matching row is not-found. The two are
    /// distinct kinds so the boundary can answer 400 vs 404.
    pub async fn get_photo(&self, id: &str) -> AppResult<Photo> {
        let id = parse_photo_id(id).inspect_err(|e| warn!(error = %e, "Rejected photo lookup"))?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Photo {id} not found")))
    }
}

/// Parse a photo identifier, mapping syntax errors to a validation error.
pub fn parse_photo_id(id: &str) -> AppResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| AppError::validation(format!("Invalid photo id: {id}")))
}
