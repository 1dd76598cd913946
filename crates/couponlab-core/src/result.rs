//! Convenience result type alias for CouponLab.

use crate::error::AppError;

/// A specialized `Result` type for CouponLab operations.
pub type AppResult<T> = Result<T, AppError>;
