//! Coupon catalog entries.

use serde::{Deserialize, Serialize};

use super::uses::RemainingUses;

/// A discount coupon as defined in the lab catalog.
///
/// When returned from the inventory, `uses` carries the live remaining count
/// instead of the catalog's initial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Unique coupon code, matched case-sensitively.
    pub code: String,
    /// Discount granted per redemption, in whole currency units.
    pub discount: u32,
    /// Remaining uses.
    pub uses: RemainingUses,
    /// Free-form description shown by the internal catalog endpoint.
    #[serde(default)]
    pub description: String,
}

impl Coupon {
    /// Creates a coupon.
    pub fn new(
        code: impl Into<String>,
        discount: u32,
        uses: RemainingUses,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            discount,
            uses,
            description: description.into(),
        }
    }

    /// Returns a copy of this coupon with a different remaining count.
    pub fn with_uses(&self, uses: RemainingUses) -> Self {
        Self {
            uses,
            ..self.clone()
        }
    }
}
