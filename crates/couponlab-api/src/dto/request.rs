//! Request DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use couponlab_core::error::AppError;
use couponlab_core::result::AppResult;

/// Body of both apply-coupon endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplyCouponRequest {
    /// Coupon code. A missing or blank code is treated as an unknown coupon.
    #[serde(default)]
    pub code: Option<String>,
}

impl ApplyCouponRequest {
    /// Parses a raw body. Anything other than a JSON object with a string
    /// `code` produces a request without a code.
    pub fn from_body(body: &[u8]) -> Self {
        let code = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| value.get("code").and_then(Value::as_str).map(str::to_owned));
        Self { code }
    }

    /// The code to redeem, or `NotFound` when absent.
    pub fn code(&self) -> AppResult<&str> {
        self.code
            .as_deref()
            .filter(|code| !code.is_empty())
            .ok_or_else(AppError::coupon_not_found)
    }
}
