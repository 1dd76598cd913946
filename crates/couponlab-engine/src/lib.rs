//! Redemption engine for CouponLab.
//!
//! This crate provides:
//! - The in-memory coupon inventory, the only state both pipelines mutate
//! - A request window tracker that labels concurrent attempts
//! - Pacers that implement the vulnerable pipeline's suspension points
//! - The safe (atomic) and vulnerable (check-then-act) redemption pipelines

pub mod engine;
pub mod inventory;
pub mod pacer;
pub mod redeem;
pub mod tracker;

pub use engine::RedemptionEngine;
pub use inventory::InventoryStore;
pub use tracker::WindowTracker;
