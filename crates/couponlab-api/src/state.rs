//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use couponlab_core::config::AppConfig;
use couponlab_engine::RedemptionEngine;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Coupon inventory, request tracker, and both redemption pipelines
    pub engine: Arc<RedemptionEngine>,
}

impl AppState {
    /// Creates the state from its parts.
    pub fn new(config: AppConfig, engine: RedemptionEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        }
    }
}
