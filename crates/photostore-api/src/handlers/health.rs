//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
    {
        Ok(_) => "connected",
        Err(_) => "unavailable",
    };

    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
