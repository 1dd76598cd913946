//! # couponlab-core
//!
//! Core crate for CouponLab. Contains the coupon data model, configuration
//! schemas, the suspension-point pacing trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other CouponLab crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
