//! Photo service.

pub mod service;

pub use service::{PhotoService, parse_photo_id};
