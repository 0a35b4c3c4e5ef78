//! Repository implementations.

pub mod photo;

pub use photo::PhotoRepository;
