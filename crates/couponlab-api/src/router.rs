//! Route definitions for the CouponLab HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to handlers via Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(coupon_routes())
        .merge(lab_routes())
        .merge(status_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Redemption endpoints, vulnerable and safe
fn coupon_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/apply-coupon-vuln",
            post(handlers::coupon::apply_vulnerable),
        )
        .route("/apply-coupon-safe", post(handlers::coupon::apply_safe))
}

/// Lab control
fn lab_routes() -> Router<AppState> {
    Router::new().route("/reset-coupons", post(handlers::lab::reset_coupons))
}

/// Static status payloads and the internal catalog
fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/availability", get(handlers::health::availability))
        .route("/health", get(handlers::health::health))
        .route(
            "/internal/coupons",
            get(handlers::internal::internal_coupons),
        )
}
