//! # photostore-service
//!
//! Business logic for Photostore. The [`photo::PhotoService`] is the narrow
//! interface the HTTP boundary calls into: it assigns identifiers, enforces
//! validation before any storage access, and maps repository results into
//! the error taxonomy the boundary branches on.

pub mod photo;

pub use photo::PhotoService;
