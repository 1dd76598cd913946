//! Core traits defined in `couponlab-core` and implemented by other crates.

pub mod pacer;

pub use pacer::{Pacer, SuspensionPoint};
