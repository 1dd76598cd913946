//! Janitor (tracker eviction) configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Periodic sweep of stale request windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JanitorConfig {
    /// Whether the janitor task is spawned at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Seconds between sweeps.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
    /// Windows whose start is older than this many milliseconds are evicted.
    #[serde(default = "default_retention")]
    pub retention_ms: u64,
}

impl Default for JanitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sweep_interval_seconds: default_sweep_interval(),
            retention_ms: default_retention(),
        }
    }
}

impl JanitorConfig {
    /// Sweep interval as a `Duration`.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds)
    }

    /// Retention threshold as a `Duration`.
    pub fn retention(&self) -> Duration {
        Duration::from_millis(self.retention_ms)
    }
}

fn default_true() -> bool {
    true
}

fn default_sweep_interval() -> u64 {
    30
}

fn default_retention() -> u64 {
    5000
}
