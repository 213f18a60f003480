//! Convenience result type alias for RetroLog.

use crate::error::AppError;

/// A specialized `Result` type for RetroLog operations.
pub type AppResult<T> = Result<T, AppError>;
