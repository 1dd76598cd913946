//! Pacing of the named suspension points in the vulnerable redemption path.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A place where the vulnerable pipeline hands control back to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuspensionPoint {
    /// Right after `remainingUses` was copied into the request's local state.
    AfterInitialRead,
    /// The simulated processing time between read and decision.
    Processing,
    /// Between deciding to grant and writing the stale count back.
    BeforeCommit,
}

impl fmt::Display for SuspensionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AfterInitialRead => write!(f, "after_initial_read"),
            Self::Processing => write!(f, "processing"),
            Self::BeforeCommit => write!(f, "before_commit"),
        }
    }
}

/// Decides how long (and on what) a request waits at a suspension point.
///
/// Implementations must actually yield to the runtime; a busy-wait would
/// serialize requests and hide the interleaving under study.
#[async_trait]
pub trait Pacer: Send + Sync + 'static {
    /// Suspend the calling task at `point`.
    async fn pause(&self, point: SuspensionPoint);
}
