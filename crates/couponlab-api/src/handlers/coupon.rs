//! Coupon redemption handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{SafeCouponResponse, VulnerableCouponResponse};
use crate::error::ApiError;
use crate::extractors::{ClientIdentity, CouponRequest};
use crate::state::AppState;

/// POST /api/apply-coupon-vuln
pub async fn apply_vulnerable(
    State(state): State<AppState>,
    ClientIdentity(identity): ClientIdentity,
    CouponRequest(req): CouponRequest,
) -> Result<Json<VulnerableCouponResponse>, ApiError> {
    let code = req.code()?;
    let redemption = state.engine.redeem_vulnerable(&identity, code).await?;
    Ok(Json(redemption.into()))
}

/// POST /api/apply-coupon-safe
pub async fn apply_safe(
    State(state): State<AppState>,
    CouponRequest(req): CouponRequest,
) -> Result<Json<SafeCouponResponse>, ApiError> {
    let code = req.code()?;
    let redemption = state.engine.redeem_safe(code)?;
    Ok(Json(redemption.into()))
}
