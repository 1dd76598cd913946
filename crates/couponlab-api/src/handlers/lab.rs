//! Lab control handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::ResetResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/reset-coupons
pub async fn reset_coupons(State(state): State<AppState>) -> Result<Json<ResetResponse>, ApiError> {
    state.engine.reset()?;
    Ok(Json(ResetResponse {
        success: true,
        message: "Coupons reset to initial state".to_string(),
    }))
}
