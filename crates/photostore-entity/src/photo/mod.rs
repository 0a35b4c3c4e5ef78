//! Photo entity and construction-time validation.

pub mod model;

pub use model::{MAX_FILENAME_LEN, NewPhoto, Photo, PhotoSummary};
