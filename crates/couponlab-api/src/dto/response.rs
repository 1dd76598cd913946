//! Response DTOs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use couponlab_core::types::{Coupon, RemainingUses};
use couponlab_engine::redeem::{SafeRedemption, VulnerableRedemption};

/// 200 body of `POST /api/apply-coupon-vuln`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerableCouponResponse {
    /// Always `true`; failures use the error body.
    pub success: bool,
    /// Discount granted.
    pub discount: u32,
    /// Count this request wrote back (`-1` for unlimited).
    pub remaining: RemainingUses,
    /// Position within the client's request window.
    pub request_number: u64,
    /// Count observed at the initial read.
    pub initial_remaining: RemainingUses,
    /// Whether this request shared its window with others on a finite coupon.
    pub race_condition: bool,
    /// Lab explanation of the outcome.
    pub explanation: String,
    /// User-facing message.
    pub message: String,
}

impl From<VulnerableRedemption> for VulnerableCouponResponse {
    fn from(redemption: VulnerableRedemption) -> Self {
        Self {
            success: true,
            explanation: redemption.explanation(),
            message: format!("Coupon applied! ${} off", redemption.discount),
            discount: redemption.discount,
            remaining: redemption.remaining,
            request_number: redemption.request_number,
            initial_remaining: redemption.initial_remaining,
            race_condition: redemption.race_condition,
        }
    }
}

/// 200 body of `POST /api/apply-coupon-safe`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafeCouponResponse {
    /// Always `true`; failures use the error body.
    pub success: bool,
    /// Discount granted.
    pub discount: u32,
    /// Remaining uses after this redemption (`-1` for unlimited).
    pub remaining: RemainingUses,
    /// User-facing message.
    pub message: String,
    /// Marks responses from the atomic pipeline.
    pub safe: bool,
}

impl From<SafeRedemption> for SafeCouponResponse {
    fn from(redemption: SafeRedemption) -> Self {
        Self {
            success: true,
            message: format!("Coupon applied successfully! ${} off", redemption.discount),
            discount: redemption.discount,
            remaining: redemption.remaining,
            safe: true,
        }
    }
}

/// Body of `POST /api/reset-coupons`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    /// Always `true`.
    pub success: bool,
    /// Confirmation message.
    pub message: String,
}

/// Body of `GET /api/availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    /// Status keyword.
    pub status: String,
    /// Server name.
    pub server: String,
    /// Current time (RFC 3339).
    pub time: String,
    /// Whether enrollment is open.
    pub available: bool,
    /// Whether maintenance mode is on.
    pub maintenance: bool,
    /// Status message.
    pub message: String,
    /// System status keyword.
    pub system_status: String,
    /// Advertised uptime.
    pub uptime: String,
    /// Time of the last check (RFC 3339).
    pub last_checked: String,
    /// Enrollment kinds.
    pub supported_enrollment: Vec<String>,
    /// Marketing feature list.
    pub features: Vec<String>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status keyword.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Current time (RFC 3339).
    pub timestamp: String,
    /// Simulated dependency states.
    pub dependencies: HealthDependencies,
}

/// Simulated dependency states in the health payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDependencies {
    /// Database state.
    pub database: String,
    /// Cache state.
    pub cache: String,
    /// Storage state.
    pub storage: String,
}

/// Body of `GET /api/internal/coupons`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalCouponsResponse {
    /// Always `"internal"`.
    pub status: String,
    /// Catalog keyed by code.
    pub coupons: BTreeMap<String, InternalCoupon>,
    /// Note.
    pub note: String,
    /// Warning.
    pub warning: String,
}

/// One entry of the internal catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternalCoupon {
    /// Discount per use.
    pub discount: u32,
    /// Initial uses (`-1` for unlimited).
    pub uses: RemainingUses,
    /// Description.
    pub description: String,
}

impl From<&Coupon> for InternalCoupon {
    fn from(coupon: &Coupon) -> Self {
        Self {
            discount: coupon.discount,
            uses: coupon.uses,
            description: coupon.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vulnerable_response_uses_camel_case() {
        let response = VulnerableCouponResponse::from(VulnerableRedemption {
            code: "SAVE50".to_string(),
            discount: 50,
            remaining: RemainingUses::Finite(0),
            request_number: 2,
            initial_remaining: RemainingUses::Finite(1),
            race_condition: true,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["requestNumber"], 2);
        assert_eq!(json["initialRemaining"], 1);
        assert_eq!(json["raceCondition"], true);
        assert_eq!(json["message"], "Coupon applied! $50 off");
    }

    #[test]
    fn test_safe_response_reports_unlimited_as_sentinel() {
        let response = SafeCouponResponse::from(SafeRedemption {
            code: "3atwa".to_string(),
            discount: 40,
            remaining: RemainingUses::Unlimited,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["remaining"], -1);
        assert_eq!(json["safe"], true);
    }
}
