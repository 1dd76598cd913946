//! Integration tests for the static status endpoints and the internal catalog.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_payload() {
    let app = helpers::TestApp::new();

    let resp = app.request("GET", "/api/health", None, None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["status"], "healthy");
    assert_eq!(resp.body["service"], "course-platform-api");
    assert_eq!(resp.body["dependencies"]["database"], "connected");
    assert_eq!(resp.body["dependencies"]["cache"], "active");
    assert!(resp.body["timestamp"].is_string());
}

#[tokio::test]
async fn test_availability_payload() {
    let app = helpers::TestApp::new();

    let resp = app.request("GET", "/api/availability", None, None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["status"], "ok");
    assert_eq!(resp.body["available"], true);
    assert_eq!(resp.body["maintenance"], false);
    assert_eq!(resp.body["systemStatus"], "operational");
    assert_eq!(resp.body["supportedEnrollment"].as_array().unwrap().len(), 3);
    assert_eq!(resp.body["features"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_internal_catalog_lists_initial_values() {
    let app = helpers::TestApp::new();

    app.apply("/api/apply-coupon-safe", "SAVE50", "ip").await;

    let resp = app.request("GET", "/api/internal/coupons", None, None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["status"], "internal");

    let coupons = &resp.body["coupons"];
    assert_eq!(coupons["3atwa"]["discount"], 40);
    assert_eq!(coupons["3atwa"]["uses"], -1);
    assert_eq!(coupons["SAVE50"]["discount"], 50);
    assert_eq!(coupons["SAVE50"]["uses"], 1);
    assert_eq!(coupons["WELCOME20"]["uses"], 1);
    assert!(resp.body["warning"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = helpers::TestApp::new();
    let resp = app.request("GET", "/api/coupons", None, None).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
