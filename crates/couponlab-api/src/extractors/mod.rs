//! Custom Axum extractors.

pub mod client;
pub mod coupon;

pub use client::ClientIdentity;
pub use coupon::CouponRequest;
