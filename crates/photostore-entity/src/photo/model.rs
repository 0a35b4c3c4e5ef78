//! Photo entity models.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use photostore_core::error::AppError;
use photostore_core::result::AppResult;

/// Maximum stored filename length, matching the column bound in the photos
/// table. Longer names are rejected, not truncated.
pub const MAX_FILENAME_LEN: usize = 250;

/// A photo stored in Photostore, including its binary content.
///
/// Rows are immutable after insertion; the only write operation is insert.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Photo {
    /// Unique photo identifier.
    pub id: Uuid,
    /// Original client-supplied filename, stored verbatim.
    pub filename: String,
    /// Original content type as supplied by the client, if any.
    pub mime_type: Option<String>,
    /// Byte length of `content`. Always equals `content.len()`.
    pub size_bytes: i64,
    /// Raw binary payload, stored and returned unmodified.
    pub content: Vec<u8>,
    /// When the photo was inserted.
    pub created_at: DateTime<Utc>,
}

impl Photo {
    /// The metadata-only shape of this photo, for listings and metadata
    /// responses.
    pub fn summary(&self) -> PhotoSummary {
        PhotoSummary {
            id: self.id,
            filename: self.filename.clone(),
            mime_type: self.mime_type.clone(),
            size_bytes: self.size_bytes,
            created_at: self.created_at,
        }
    }
}

/// Photo metadata without the binary content.
///
/// Used for listings so large blobs are never transferred when only the
/// metadata is needed. This is a projection of [`Photo`], not a different
/// entity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PhotoSummary {
    /// Unique photo identifier.
    pub id: Uuid,
    /// Original client-supplied filename.
    pub filename: String,
    /// Original content type, if any.
    pub mime_type: Option<String>,
    /// Byte length of the stored content.
    pub size_bytes: i64,
    /// When the photo was inserted.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new photo.
#[derive(Debug, Clone)]
pub struct NewPhoto {
    /// Identifier assigned at construction; never reassigned.
    pub id: Uuid,
    /// Original filename.
    pub filename: String,
    /// Original content type, if any.
    pub mime_type: Option<String>,
    /// Raw binary payload.
    pub content: Bytes,
}

impl NewPhoto {
    /// Create an insert payload with a freshly generated v4 identifier.
    ///
    /// Validates the filename before any storage access.
    pub fn new(filename: String, mime_type: Option<String>, content: Bytes) -> AppResult<Self> {
        Self::with_id(Uuid::new_v4(), filename, mime_type, content)
    }

    /// Create an insert payload with an explicit identifier.
    pub fn with_id(
        id: Uuid,
        filename: String,
        mime_type: Option<String>,
        content: Bytes,
    ) -> AppResult<Self> {
        validate_filename(&filename)?;
        Ok(Self {
            id,
            filename,
            mime_type,
            content,
        })
    }

    /// Byte length of the content, as stored in the `size_bytes` column.
    pub fn size_bytes(&self) -> i64 {
        self.content.len() as i64
    }
}

/// Check that a filename fits the photos table bound and is not empty.
pub fn validate_filename(filename: &str) -> AppResult<()> {
    if filename.is_empty() {
        return Err(AppError::validation("Filename must not be empty"));
    }
    if filename.chars().count() > MAX_FILENAME_LEN {
        return Err(AppError::validation(format!(
            "Filename exceeds maximum length of {MAX_FILENAME_LEN} characters"
        )));
    }
    Ok(())
}
