//! # couponlab-api
//!
//! HTTP API layer for CouponLab built on Axum.
//!
//! Exposes the safe and vulnerable redemption endpoints, the reset endpoint,
//! and the static collaborator endpoints (availability, health, internal
//! catalog), plus CORS and request logging middleware.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
