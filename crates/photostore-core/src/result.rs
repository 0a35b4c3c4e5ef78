//! Convenience result type alias for Photostore.

use crate::error::AppError;

/// A specialized `Result` type for Photostore operations.
pub type AppResult<T> = Result<T, AppError>;
