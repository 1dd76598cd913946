//! Redemption pipelines.

pub mod outcome;
pub mod safe;
pub mod vulnerable;

pub use outcome::{SafeRedemption, VulnerableRedemption};
pub use safe::SafePipeline;
pub use vulnerable::VulnerablePipeline;
