//! Per (client, coupon) request windows.
//!
//! The tracker only labels attempts. It never rejects, throttles, or delays a
//! request; redemption outcomes do not depend on anything stored here.

use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;
use tracing::debug;

/// Composite identity of a request window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowKey {
    /// Client identity (usually the remote IP).
    pub identity: String,
    /// Coupon code being redeemed.
    pub code: String,
}

impl WindowKey {
    /// Creates a window key.
    pub fn new(identity: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            code: code.into(),
        }
    }
}

/// Counter state of one window.
#[derive(Debug, Clone, Copy)]
struct RequestWindow {
    request_count: u64,
    window_start: Instant,
}

/// Sliding request counter keyed by [`WindowKey`].
#[derive(Debug)]
pub struct WindowTracker {
    windows: DashMap<WindowKey, RequestWindow>,
    window_duration: Duration,
}

impl WindowTracker {
    /// Creates an empty tracker whose windows restart after `window_duration`.
    pub fn new(window_duration: Duration) -> Self {
        Self {
            windows: DashMap::new(),
            window_duration,
        }
    }

    /// Records one attempt and returns its number within the active window.
    ///
    /// The increment happens under the entry's shard lock, so concurrent
    /// callers for the same key always receive distinct numbers.
    pub fn record_attempt(&self, identity: &str, code: &str) -> u64 {
        let now = Instant::now();
        let mut window = self
            .windows
            .entry(WindowKey::new(identity, code))
            .or_insert(RequestWindow {
                request_count: 0,
                window_start: now,
            });

        if now.duration_since(window.window_start) > self.window_duration {
            window.request_count = 0;
            window.window_start = now;
        }

        window.request_count += 1;
        window.request_count
    }

    /// Drops windows that started more than `retention` ago.
    ///
    /// Returns how many windows were removed.
    pub fn evict_older_than(&self, retention: Duration) -> usize {
        let now = Instant::now();
        let mut evicted = 0;
        self.windows.retain(|_, window| {
            let keep = now.duration_since(window.window_start) <= retention;
            if !keep {
                evicted += 1;
            }
            keep
        });
        debug!(evicted, remaining = self.windows.len(), "Evicted stale request windows");
        evicted
    }

    /// Forgets every window.
    pub fn clear(&self) {
        self.windows.clear();
    }

    /// Number of tracked windows.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no windows are tracked.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
