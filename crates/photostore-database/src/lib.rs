//! # photostore-database
//!
//! PostgreSQL connection management, idempotent schema bootstrap, and the
//! concrete photo repository for Photostore.

pub mod connection;
pub mod repositories;
pub mod schema;

pub use connection::DatabasePool;
pub use repositories::PhotoRepository;
