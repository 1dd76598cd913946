//! Coupon inventory.

pub mod store;

pub use store::{InventoryStore, SafeRedeem};
