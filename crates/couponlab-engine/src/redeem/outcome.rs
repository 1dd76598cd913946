//! Successful redemption results.

use serde::Serialize;

use couponlab_core::types::RemainingUses;

/// A use granted by the safe pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafeRedemption {
    /// Redeemed code.
    pub code: String,
    /// Discount granted.
    pub discount: u32,
    /// Remaining uses after this redemption.
    pub remaining: RemainingUses,
}

/// A use granted by the vulnerable pipeline, with race diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VulnerableRedemption {
    /// Redeemed code.
    pub code: String,
    /// Discount granted.
    pub discount: u32,
    /// Count this request wrote back (or the sentinel for unlimited coupons).
    pub remaining: RemainingUses,
    /// Position of this attempt inside its request window.
    pub request_number: u64,
    /// Count observed at the initial read.
    pub initial_remaining: RemainingUses,
    /// Whether other attempts shared this window on a finite coupon.
    pub race_condition: bool,
}

impl VulnerableRedemption {
    /// Human-readable account of what happened, for the lab UI.
    pub fn explanation(&self) -> String {
        if self.request_number > 1 {
            format!(
                "Race condition exploited: {} rapid requests processed with initial count {}",
                self.request_number,
                self.initial_remaining.to_raw()
            )
        } else {
            "Single request processed normally".to_string()
        }
    }
}
