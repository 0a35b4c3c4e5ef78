//! # photostore-entity
//!
//! Domain entity models for Photostore. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod photo;

pub use photo::{MAX_FILENAME_LEN, NewPhoto, Photo, PhotoSummary};
