//! Background housekeeping for CouponLab.
//!
//! This crate provides the janitor that periodically evicts stale request
//! windows so the tracker's memory stays bounded. Nothing here influences
//! redemption outcomes.

pub mod janitor;

pub use janitor::Janitor;
