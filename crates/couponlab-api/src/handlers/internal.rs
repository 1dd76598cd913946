//! The "internal" catalog endpoint that the lab's SSRF exercise discovers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{InternalCoupon, InternalCouponsResponse};
use crate::state::AppState;

/// GET /api/internal/coupons
///
/// Lists the initial catalog, not live counts.
pub async fn internal_coupons(State(state): State<AppState>) -> Json<InternalCouponsResponse> {
    let coupons = state
        .engine
        .inventory()
        .catalog()
        .map(|coupon| (coupon.code.clone(), InternalCoupon::from(coupon)))
        .collect();

    Json(InternalCouponsResponse {
        status: "internal".to_string(),
        coupons,
        note: "Internal coupon database - do not expose publicly".to_string(),
        warning: "This endpoint should not be publicly accessible".to_string(),
    })
}
