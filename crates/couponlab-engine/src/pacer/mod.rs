//! [`Pacer`](couponlab_core::traits::Pacer) implementations.
//!
//! - [`TimedPacer`] sleeps for the configured (jittered) delay at each point.
//! - [`GatePacer`] holds requests at chosen points until a fixed number of
//!   them have arrived, forcing a specific interleaving.

pub mod gate;
pub mod timed;

pub use gate::GatePacer;
pub use timed::TimedPacer;
