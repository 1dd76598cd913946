//! Coupon catalog, suspension delays, and request window configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::traits::pacer::SuspensionPoint;
use crate::types::{Coupon, RemainingUses};

/// Everything the redemption engine is seeded with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabConfig {
    /// Initial catalog; the reset endpoint restores exactly this snapshot.
    #[serde(default = "default_coupons")]
    pub coupons: Vec<Coupon>,
    /// Suspension delays of the vulnerable pipeline.
    #[serde(default)]
    pub delays: DelayConfig,
    /// Request window used to label concurrent attempts.
    #[serde(default)]
    pub window: WindowConfig,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            coupons: default_coupons(),
            delays: DelayConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

/// A randomized delay: `base_ms` plus up to `jitter_ms` extra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelaySpec {
    /// Fixed part in milliseconds.
    #[serde(default)]
    pub base_ms: u64,
    /// Upper bound of the uniformly random extra part in milliseconds.
    #[serde(default)]
    pub jitter_ms: u64,
}

impl DelaySpec {
    /// Creates a delay spec.
    pub const fn new(base_ms: u64, jitter_ms: u64) -> Self {
        Self { base_ms, jitter_ms }
    }

    /// Delay with the given amount of jitter already chosen.
    pub fn with_jitter(&self, extra_ms: u64) -> Duration {
        Duration::from_millis(self.base_ms.saturating_add(extra_ms.min(self.jitter_ms)))
    }
}

/// Per-suspension-point delays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelayConfig {
    /// Wait after the initial read of `remainingUses`.
    #[serde(default = "default_after_initial_read")]
    pub after_initial_read: DelaySpec,
    /// Simulated processing time; the widest part of the race window.
    #[serde(default = "default_processing")]
    pub processing: DelaySpec,
    /// Wait between deciding to grant and writing the count back.
    #[serde(default = "default_before_commit")]
    pub before_commit: DelaySpec,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            after_initial_read: default_after_initial_read(),
            processing: default_processing(),
            before_commit: default_before_commit(),
        }
    }
}

impl DelayConfig {
    /// All three points with no delay at all.
    pub fn immediate() -> Self {
        Self {
            after_initial_read: DelaySpec::new(0, 0),
            processing: DelaySpec::new(0, 0),
            before_commit: DelaySpec::new(0, 0),
        }
    }

    /// The delay configured for `point`.
    pub fn spec_for(&self, point: SuspensionPoint) -> DelaySpec {
        match point {
            SuspensionPoint::AfterInitialRead => self.after_initial_read,
            SuspensionPoint::Processing => self.processing,
            SuspensionPoint::BeforeCommit => self.before_commit,
        }
    }
}

/// Request window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// A window older than this many milliseconds restarts its count.
    #[serde(default = "default_window_duration")]
    pub duration_ms: u64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_window_duration(),
        }
    }
}

impl WindowConfig {
    /// Window duration as a `Duration`.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

fn default_coupons() -> Vec<Coupon> {
    vec![
        Coupon::new(
            "3atwa",
            40,
            RemainingUses::Unlimited,
            "Unlimited uses - $40 off per use",
        ),
        Coupon::new(
            "SAVE50",
            50,
            RemainingUses::Finite(1),
            "Single use - 50% off",
        ),
        Coupon::new(
            "WELCOME20",
            20,
            RemainingUses::Finite(1),
            "Single use - 20% off",
        ),
    ]
}

fn default_after_initial_read() -> DelaySpec {
    DelaySpec::new(100, 50)
}

fn default_processing() -> DelaySpec {
    DelaySpec::new(200, 100)
}

fn default_before_commit() -> DelaySpec {
    DelaySpec::new(50, 50)
}

fn default_window_duration() -> u64 {
    2000
}
