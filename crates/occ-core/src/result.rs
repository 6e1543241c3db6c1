//! Convenience result type alias for OCC.

use crate::error::AppError;

/// A specialized `Result` type for OCC operations.
pub type AppResult<T> = Result<T, AppError>;
