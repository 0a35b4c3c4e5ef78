//! Photo repository implementation.

use sqlx::PgPool;
use tracing::{error, warn};
use uuid::Uuid;

use photostore_core::error::{AppError, ErrorKind};
use photostore_core::result::AppResult;
use photostore_entity::photo::model::{NewPhoto, Photo, PhotoSummary};

use crate::schema::validate_schema_name;

/// Repository for photo insert and query operations.
///
/// The table lives in a configurable schema, so queries are rendered once at
/// construction with the validated schema name baked in.
#[derive(Debug, Clone)]
pub struct PhotoRepository {
    pool: PgPool,
    insert_sql: String,
    list_sql: String,
    find_sql: String,
}

impl PhotoRepository {
    /// Create a new photo repository over the given pool and schema.
    pub fn new(pool: PgPool, schema: &str) -> AppResult<Self> {
        validate_schema_name(schema)?;
        Ok(Self {
            pool,
            insert_sql: format!(
                "INSERT INTO {schema}.photos (id, filename, mime_type, size_bytes, content) \
                 VALUES ($1, $2, $3, $4, $5) RETURNING *"
            ),
            // Listing deliberately never selects `content`; order is insertion
            // order, ties broken by id for determinism.
            list_sql: format!(
                "SELECT id, filename, mime_type, size_bytes, created_at \
                 FROM {schema}.photos ORDER BY created_at, id"
            ),
            find_sql: format!("SELECT * FROM {schema}.photos WHERE id = $1"),
        })
    }

    /// Insert a photo. A single statement, so no partial row is ever visible.
    ///
    /// A duplicate id maps to a conflict; the primary-key constraint, not
    /// application logic, is what decides racing inserts.
    pub async fn insert(&self, photo: &NewPhoto) -> AppResult<Photo> {
        sqlx::query_as::<_, Photo>(&self.insert_sql)
            .bind(photo.id)
            .bind(&photo.filename)
            .bind(&photo.mime_type)
            .bind(photo.size_bytes())
            .bind(photo.content.as_ref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    warn!(id = %photo.id, "Duplicate photo id on insert");
                    AppError::conflict(format!("Photo {} already exists", photo.id))
                }
                _ => {
                    error!(id = %photo.id, error = %e, "Failed to insert photo");
                    AppError::with_source(ErrorKind::Database, "Failed to insert photo", e)
                }
            })
    }

    /// List all photos as metadata-only summaries, in insertion order.
    pub async fn list_all(&self) -> AppResult<Vec<PhotoSummary>> {
        sqlx::query_as::<_, PhotoSummary>(&self.list_sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list photos");
                AppError::with_source(ErrorKind::Database, "Failed to list photos", e)
            })
    }

    /// Find a photo by id, content included. `None` means not found.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Photo>> {
        sqlx::query_as::<_, Photo>(&self.find_sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(id = %id, error = %e, "Failed to find photo");
                AppError::with_source(ErrorKind::Database, "Failed to find photo", e)
            })
    }
}
