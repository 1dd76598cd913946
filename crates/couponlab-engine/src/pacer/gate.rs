//! Barrier-based pacing that makes interleavings deterministic.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Barrier;

use couponlab_core::traits::{Pacer, SuspensionPoint};

/// Holds tasks at gated points until `parties` of them are waiting there.
///
/// Ungated points just yield once. A gate re-arms after releasing a group, so
/// a gate with `parties = 2` pairs up every two arrivals.
#[derive(Debug, Clone, Default)]
pub struct GatePacer {
    gates: HashMap<SuspensionPoint, Arc<Barrier>>,
}

impl GatePacer {
    /// A pacer with no gates; every point is a bare yield.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gates `point` so that `parties` tasks must reach it before any proceeds.
    pub fn with_gate(mut self, point: SuspensionPoint, parties: usize) -> Self {
        self.gates.insert(point, Arc::new(Barrier::new(parties)));
        self
    }
}

#[async_trait]
impl Pacer for GatePacer {
    async fn pause(&self, point: SuspensionPoint) {
        match self.gates.get(&point) {
            Some(barrier) => {
                barrier.wait().await;
            }
            None => tokio::task::yield_now().await,
        }
    }
}
