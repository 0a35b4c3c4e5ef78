//! Route definitions for the Photostore HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Body limit leaves room for the multipart framing around the payload.
    let max_body = state.config.upload.max_size_bytes as usize + 64 * 1024;

    let api_routes = Router::new()
        .merge(photo_routes())
        .route("/health", get(handlers::health::health));

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Photo upload, listing, metadata, download.
fn photo_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/photos",
            get(handlers::photo::list_photos).post(handlers::photo::upload_photo),
        )
        .route("/photos/{id}", get(handlers::photo::get_photo))
        .route("/photos/{id}/download", get(handlers::photo::download_photo))
}
