//! Request window tracking for concurrency diagnostics.

pub mod window;

pub use window::{WindowKey, WindowTracker};
