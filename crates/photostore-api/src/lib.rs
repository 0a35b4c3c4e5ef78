//! # photostore-api
//!
//! HTTP API layer for Photostore built on Axum.
//!
//! Provides the photo endpoints (upload, list, metadata, download), the
//! health probe, error mapping, and the server runner.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::run_server;
pub use router::build_router;
pub use state::AppState;
