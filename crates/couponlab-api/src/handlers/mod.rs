//! Route handlers organized by concern.

pub mod coupon;
pub mod health;
pub mod internal;
pub mod lab;
