//! Atomic check-and-decrement redemption.

use std::sync::Arc;

use tracing::info;

use couponlab_core::error::AppError;
use couponlab_core::result::AppResult;

use super::outcome::SafeRedemption;
use crate::inventory::InventoryStore;

/// Redeems coupons in one indivisible step.
///
/// `redeem` is synchronous: there is no point between the check
/// and the decrement where another task could run.
#[derive(Debug, Clone)]
pub struct SafePipeline {
    inventory: Arc<InventoryStore>,
}

impl SafePipeline {
    /// Creates a pipeline over `inventory`.
    pub fn new(inventory: Arc<InventoryStore>) -> Self {
        Self { inventory }
    }

    /// Grants one use of `code` if any is left.
    pub fn redeem(&self, code: &str) -> AppResult<SafeRedemption> {
        let coupon = self.inventory.get(code)?;
        let outcome = self.inventory.try_safe_redeem(code)?;
        if !outcome.granted {
            return Err(AppError::coupon_exhausted());
        }

        info!(code, remaining = %outcome.remaining, "Safe redemption granted");
        Ok(SafeRedemption {
            code: coupon.code,
            discount: coupon.discount,
            remaining: outcome.remaining,
        })
    }
}
