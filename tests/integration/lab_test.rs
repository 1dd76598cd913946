//! Integration tests for lab control: resetting the shared inventory.

mod helpers;

use axum::http::StatusCode;
use couponlab_core::traits::SuspensionPoint;
use couponlab_core::types::RemainingUses;
use couponlab_engine::pacer::GatePacer;

#[tokio::test]
async fn test_reset_restores_exhausted_coupons() {
    let app = helpers::TestApp::new();

    let used = app.apply("/api/apply-coupon-safe", "SAVE50", "ip").await;
    assert_eq!(used.status, StatusCode::OK);
    let exhausted = app.apply("/api/apply-coupon-safe", "SAVE50", "ip").await;
    assert_eq!(exhausted.status, StatusCode::BAD_REQUEST);

    let reset = app.request("POST", "/api/reset-coupons", None, None).await;
    assert_eq!(reset.status, StatusCode::OK);
    assert_eq!(reset.body["success"], true);
    assert_eq!(reset.body["message"], "Coupons reset to initial state");
    assert_eq!(app.remaining("SAVE50"), RemainingUses::Finite(1));

    let again = app.apply("/api/apply-coupon-safe", "SAVE50", "ip").await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.body["remaining"], 0);
}

#[tokio::test]
async fn test_reset_is_idempotent() {
    let app = helpers::TestApp::new();
    let fresh = app.state.engine.inventory().snapshot().unwrap();

    app.apply("/api/apply-coupon-vuln", "WELCOME20", "ip").await;
    for _ in 0..3 {
        let resp = app.request("POST", "/api/reset-coupons", None, None).await;
        assert_eq!(resp.status, StatusCode::OK);
    }

    assert_eq!(app.state.engine.inventory().snapshot().unwrap(), fresh);
}

#[tokio::test]
async fn test_reset_after_race_forgets_request_windows() {
    let pacer = GatePacer::new().with_gate(SuspensionPoint::BeforeCommit, 2);
    let app = helpers::TestApp::with_pacer(pacer);

    let (a, b) = tokio::join!(
        app.apply("/api/apply-coupon-vuln", "WELCOME20", "198.51.100.9"),
        app.apply("/api/apply-coupon-vuln", "WELCOME20", "198.51.100.9"),
    );
    assert_eq!(a.status, StatusCode::OK);
    assert_eq!(b.status, StatusCode::OK);
    assert!(!app.state.engine.tracker().is_empty());

    app.request("POST", "/api/reset-coupons", None, None).await;
    assert!(app.state.engine.tracker().is_empty());
    assert_eq!(app.remaining("WELCOME20"), RemainingUses::Finite(1));

    // A lone request after reset starts a fresh window; the gate needs a
    // partner, so go through the safe path for the count check.
    let safe = app.apply("/api/apply-coupon-safe", "WELCOME20", "198.51.100.9").await;
    assert_eq!(safe.status, StatusCode::OK);
    assert_eq!(safe.body["remaining"], 0);
}
