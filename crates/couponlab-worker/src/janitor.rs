//! Janitor that sweeps stale request windows on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};

use couponlab_core::config::JanitorConfig;
use couponlab_engine::tracker::WindowTracker;

/// Periodic evictor for the request window tracker.
#[derive(Debug)]
pub struct Janitor {
    /// Tracker being swept
    tracker: Arc<WindowTracker>,
    /// Time between sweeps
    sweep_interval: Duration,
    /// Windows older than this are evicted
    retention: Duration,
    /// Janitor identifier (for logs)
    janitor_id: String,
}

impl Janitor {
    /// Create a new janitor. Intervals below one second are raised to one second.
    pub fn new(tracker: Arc<WindowTracker>, config: &JanitorConfig) -> Self {
        Self {
            tracker,
            sweep_interval: config.sweep_interval().max(Duration::from_secs(1)),
            retention: config.retention(),
            janitor_id: format!("janitor-{}", &uuid::Uuid::new_v4().simple().to_string()[..8]),
        }
    }

    /// Run a single sweep, returning the number of evicted windows
    pub fn sweep(&self) -> usize {
        let evicted = self.tracker.evict_older_than(self.retention);
        if evicted > 0 {
            tracing::info!(
                janitor = %self.janitor_id,
                evicted,
                remaining = self.tracker.len(),
                "Evicted stale request windows"
            );
        }
        evicted
    }

    /// Sweep on every tick until the cancel signal is received
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(
            "Janitor '{}' started with interval={:?}, retention={:?}",
            self.janitor_id,
            self.sweep_interval,
            self.retention
        );

        let mut ticker = time::interval_at(
            time::Instant::now() + self.sweep_interval,
            self.sweep_interval,
        );
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        tracing::info!("Janitor '{}' received shutdown signal", self.janitor_id);
                        break;
                    }
                }
                _ = ticker.tick() => {
                    self.sweep();
                }
            }
        }

        tracing::info!("Janitor '{}' shut down complete", self.janitor_id);
    }
}
