//! Health and availability handlers.

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::dto::response::{AvailabilityResponse, HealthDependencies, HealthResponse};

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "course-platform-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now_rfc3339(),
        dependencies: HealthDependencies {
            database: "connected".to_string(),
            cache: "active".to_string(),
            storage: "ok".to_string(),
        },
    })
}

/// GET /api/availability
pub async fn availability() -> Json<AvailabilityResponse> {
    let now = now_rfc3339();
    Json(AvailabilityResponse {
        status: "ok".to_string(),
        server: "course-platform".to_string(),
        time: now.clone(),
        available: true,
        maintenance: false,
        message: "All courses are available for enrollment".to_string(),
        system_status: "operational".to_string(),
        uptime: "99.9%".to_string(),
        last_checked: now,
        supported_enrollment: ["individual", "team", "enterprise"]
            .into_iter()
            .map(String::from)
            .collect(),
        features: [
            "Live instructor support",
            "Certificate of completion",
            "Lifetime access",
            "Mobile app access",
            "Community forum",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    })
}
