//! Lenient body extractor for the apply-coupon endpoints.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};

use couponlab_core::error::AppError;

use crate::dto::request::ApplyCouponRequest;
use crate::error::ApiError;

/// The apply-coupon body, parsed without rejecting on shape.
///
/// An empty body, a non-JSON body, any Content-Type, or a `code` that is not
/// a string all yield a request without a code, which the handler reports as
/// an unknown coupon. Only a body that cannot be read at all is rejected.
#[derive(Debug, Clone)]
pub struct CouponRequest(pub ApplyCouponRequest);

impl<S> FromRequest<S> for CouponRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            ApiError(AppError::validation(format!(
                "Failed to read request body: {rejection}"
            )))
        })?;

        Ok(Self(ApplyCouponRequest::from_body(&body)))
    }
}
