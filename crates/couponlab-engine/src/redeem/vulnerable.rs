//! Check-then-act redemption with a deliberate lost-update race.
//!
//! Each request walks `Validate → InitialRead → ProcessingDelay →
//! DecideAndCommit → Respond`. The count is read once, the task yields at up to
//! three suspension points, and the commit writes `initial - 1` derived from
//! that first read. Requests that overlap the window all see the same count
//! and all get the discount, while the stored count only drops by one.

use std::sync::Arc;

use tracing::{info, trace, warn};

use couponlab_core::error::AppError;
use couponlab_core::result::AppResult;
use couponlab_core::traits::{Pacer, SuspensionPoint};
use couponlab_core::types::{Coupon, RemainingUses};

use super::outcome::VulnerableRedemption;
use crate::inventory::InventoryStore;
use crate::tracker::WindowTracker;

/// State carried from the initial read to the response.
#[derive(Debug)]
struct Attempt {
    coupon: Coupon,
    request_number: u64,
    initial: RemainingUses,
}

impl Attempt {
    fn into_redemption(self, remaining: RemainingUses) -> VulnerableRedemption {
        VulnerableRedemption {
            race_condition: self.request_number > 1 && self.initial.is_finite(),
            code: self.coupon.code,
            discount: self.coupon.discount,
            remaining,
            request_number: self.request_number,
            initial_remaining: self.initial,
        }
    }
}

/// Per-request pipeline state.
#[derive(Debug)]
enum Stage {
    Validate,
    InitialRead { coupon: Coupon, request_number: u64 },
    ProcessingDelay(Attempt),
    DecideAndCommit(Attempt),
    Respond(VulnerableRedemption),
}

impl Stage {
    fn name(&self) -> &'static str {
        match self {
            Self::Validate => "validate",
            Self::InitialRead { .. } => "initial_read",
            Self::ProcessingDelay(_) => "processing_delay",
            Self::DecideAndCommit(_) => "decide_and_commit",
            Self::Respond(_) => "respond",
        }
    }
}

/// The racy redemption pipeline.
#[derive(Clone)]
pub struct VulnerablePipeline {
    inventory: Arc<InventoryStore>,
    tracker: Arc<WindowTracker>,
    pacer: Arc<dyn Pacer>,
}

impl std::fmt::Debug for VulnerablePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VulnerablePipeline")
            .field("inventory", &self.inventory)
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

impl VulnerablePipeline {
    /// Creates a pipeline over the shared inventory and tracker.
    pub fn new(
        inventory: Arc<InventoryStore>,
        tracker: Arc<WindowTracker>,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            inventory,
            tracker,
            pacer,
        }
    }

    /// Runs one request for `code` on behalf of `identity`.
    pub async fn redeem(&self, identity: &str, code: &str) -> AppResult<VulnerableRedemption> {
        let mut stage = Stage::Validate;

        loop {
            trace!(code, stage = stage.name(), "Vulnerable pipeline step");

            stage = match stage {
                Stage::Validate => {
                    let coupon = self.inventory.get(code)?;
                    let request_number = self.tracker.record_attempt(identity, code);
                    info!(request_number, code, identity, "Vulnerable redemption attempt");
                    Stage::InitialRead {
                        coupon,
                        request_number,
                    }
                }
                Stage::InitialRead {
                    coupon,
                    request_number,
                } => {
                    let initial = self.inventory.racy_read(code)?;
                    self.pacer.pause(SuspensionPoint::AfterInitialRead).await;
                    Stage::ProcessingDelay(Attempt {
                        coupon,
                        request_number,
                        initial,
                    })
                }
                Stage::ProcessingDelay(attempt) => {
                    self.pacer.pause(SuspensionPoint::Processing).await;
                    Stage::DecideAndCommit(attempt)
                }
                Stage::DecideAndCommit(attempt) => {
                    let remaining = match attempt.initial {
                        RemainingUses::Finite(0) => {
                            info!(
                                request_number = attempt.request_number,
                                code, "Coupon exhausted at decisive check"
                            );
                            return Err(AppError::coupon_exhausted());
                        }
                        RemainingUses::Finite(initial) => {
                            self.pacer.pause(SuspensionPoint::BeforeCommit).await;
                            let written = self.inventory.racy_commit(code, initial)?;
                            warn!(
                                request_number = attempt.request_number,
                                code,
                                initial,
                                written = %written,
                                "Stale count committed"
                            );
                            written
                        }
                        RemainingUses::Unlimited => RemainingUses::Unlimited,
                    };
                    Stage::Respond(attempt.into_redemption(remaining))
                }
                Stage::Respond(redemption) => return Ok(redemption),
            };
        }
    }
}
