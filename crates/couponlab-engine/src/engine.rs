//! Wires the inventory, tracker, and both pipelines together.

use std::sync::Arc;

use tracing::info;

use couponlab_core::config::LabConfig;
use couponlab_core::result::AppResult;
use couponlab_core::traits::Pacer;

use crate::inventory::InventoryStore;
use crate::redeem::{SafePipeline, SafeRedemption, VulnerablePipeline, VulnerableRedemption};
use crate::tracker::WindowTracker;

/// The redemption engine: one inventory shared by both pipelines.
#[derive(Debug, Clone)]
pub struct RedemptionEngine {
    inventory: Arc<InventoryStore>,
    tracker: Arc<WindowTracker>,
    safe: SafePipeline,
    vulnerable: VulnerablePipeline,
}

impl RedemptionEngine {
    /// Builds an engine from explicit parts.
    pub fn new(
        inventory: Arc<InventoryStore>,
        tracker: Arc<WindowTracker>,
        pacer: Arc<dyn Pacer>,
    ) -> Self {
        Self {
            safe: SafePipeline::new(Arc::clone(&inventory)),
            vulnerable: VulnerablePipeline::new(
                Arc::clone(&inventory),
                Arc::clone(&tracker),
                pacer,
            ),
            inventory,
            tracker,
        }
    }

    /// Builds an engine seeded from the lab configuration.
    pub fn from_config(lab: &LabConfig, pacer: Arc<dyn Pacer>) -> AppResult<Self> {
        let inventory = Arc::new(InventoryStore::from_catalog(lab.coupons.clone())?);
        let tracker = Arc::new(WindowTracker::new(lab.window.duration()));
        Ok(Self::new(inventory, tracker, pacer))
    }

    /// Redeems through the atomic pipeline.
    pub fn redeem_safe(&self, code: &str) -> AppResult<SafeRedemption> {
        self.safe.redeem(code)
    }

    /// Redeems through the check-then-act pipeline.
    pub async fn redeem_vulnerable(
        &self,
        identity: &str,
        code: &str,
    ) -> AppResult<VulnerableRedemption> {
        self.vulnerable.redeem(identity, code).await
    }

    /// Restores the initial inventory and forgets every request window.
    pub fn reset(&self) -> AppResult<()> {
        self.inventory.reset()?;
        self.tracker.clear();
        info!("Lab state reset");
        Ok(())
    }

    /// The shared inventory.
    pub fn inventory(&self) -> &Arc<InventoryStore> {
        &self.inventory
    }

    /// The request window tracker.
    pub fn tracker(&self) -> &Arc<WindowTracker> {
        &self.tracker
    }
}
