//! Application builder: wires engine, janitor, router, and server together.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::sync::watch;

use couponlab_core::config::AppConfig;
use couponlab_core::error::AppError;
use couponlab_core::traits::Pacer;
use couponlab_engine::RedemptionEngine;
use couponlab_engine::pacer::TimedPacer;
use couponlab_worker::Janitor;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application for `config` using `pacer` at the
/// vulnerable pipeline's suspension points.
pub fn build_app(config: AppConfig, pacer: Arc<dyn Pacer>) -> Result<(Router, AppState), AppError> {
    let engine = RedemptionEngine::from_config(&config.lab, pacer)?;
    let state = AppState::new(config, engine);
    Ok((build_router(state.clone()), state))
}

/// Runs the CouponLab server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CouponLab server...");

    // ── Step 1: Engine with wall-clock pacing ────────────────────
    let pacer: Arc<dyn Pacer> = Arc::new(TimedPacer::new(config.lab.delays.clone()));
    let (app, state) = build_app(config.clone(), pacer)?;
    tracing::info!(
        coupons = state.engine.inventory().catalog().count(),
        window_ms = config.lab.window.duration_ms,
        "Redemption engine initialized"
    );

    // ── Step 2: Shutdown channel & janitor ───────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let janitor_handle = if config.janitor.enabled {
        let janitor = Janitor::new(Arc::clone(state.engine.tracker()), &config.janitor);
        Some(tokio::spawn(async move {
            janitor.run(shutdown_rx).await;
        }))
    } else {
        tracing::info!("Janitor disabled");
        None
    };

    // ── Step 3: Bind and serve ───────────────────────────────────
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Lab server listening on http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    })
    .await
    .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(handle) = janitor_handle {
        if let Err(e) = handle.await {
            tracing::warn!("Janitor task ended abnormally: {}", e);
        }
    }

    tracing::info!("CouponLab server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
