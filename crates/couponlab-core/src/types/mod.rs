//! Shared domain types used across crates.

pub mod coupon;
pub mod uses;

pub use coupon::Coupon;
pub use uses::RemainingUses;
