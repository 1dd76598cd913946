//! Wall-clock pacing with random jitter.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

use couponlab_core::config::DelayConfig;
use couponlab_core::traits::{Pacer, SuspensionPoint};

/// Sleeps `base + random(0..=jitter)` milliseconds at every suspension point.
#[derive(Debug, Clone)]
pub struct TimedPacer {
    delays: DelayConfig,
}

impl TimedPacer {
    /// Creates a pacer from the configured delays.
    pub fn new(delays: DelayConfig) -> Self {
        Self { delays }
    }

    /// Picks the delay for one visit to `point`.
    pub fn delay_for(&self, point: SuspensionPoint) -> Duration {
        let spec = self.delays.spec_for(point);
        let extra = if spec.jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=spec.jitter_ms)
        };
        spec.with_jitter(extra)
    }
}

#[async_trait]
impl Pacer for TimedPacer {
    async fn pause(&self, point: SuspensionPoint) {
        let delay = self.delay_for(point);
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}
