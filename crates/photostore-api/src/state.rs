//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use photostore_core::config::AppConfig;
use photostore_database::repositories::photo::PhotoRepository;
use photostore_service::photo::service::PhotoService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health probe).
    pub db_pool: PgPool,
    /// Photo repository.
    pub photo_repo: Arc<PhotoRepository>,
    /// Photo service.
    pub photo_service: Arc<PhotoService>,
}
