//! Integration tests for the safe and vulnerable redemption endpoints.

mod helpers;

use axum::http::StatusCode;
use couponlab_core::traits::SuspensionPoint;
use couponlab_core::types::RemainingUses;
use couponlab_engine::pacer::GatePacer;

const VULN: &str = "/api/apply-coupon-vuln";
const SAFE: &str = "/api/apply-coupon-safe";

#[tokio::test]
async fn test_two_overlapping_vulnerable_requests_both_get_save50() {
    let pacer = GatePacer::new().with_gate(SuspensionPoint::AfterInitialRead, 2);
    let app = helpers::TestApp::with_pacer(pacer);

    let (first, second) = tokio::join!(
        app.apply(VULN, "SAVE50", "198.51.100.4"),
        app.apply(VULN, "SAVE50", "198.51.100.4"),
    );

    for resp in [&first, &second] {
        assert_eq!(resp.status, StatusCode::OK, "body: {}", resp.body);
        assert_eq!(resp.body["success"], true);
        assert_eq!(resp.body["discount"], 50);
        assert_eq!(resp.body["initialRemaining"], 1);
        assert_eq!(resp.body["remaining"], 0);
    }

    let total = first.body["discount"].as_u64().unwrap() + second.body["discount"].as_u64().unwrap();
    assert_eq!(total, 100);
    assert_eq!(app.remaining("SAVE50"), RemainingUses::Finite(0));

    let mut numbers = [
        first.body["requestNumber"].as_u64().unwrap(),
        second.body["requestNumber"].as_u64().unwrap(),
    ];
    numbers.sort_unstable();
    assert_eq!(numbers, [1, 2]);

    let racing = [&first, &second]
        .into_iter()
        .find(|r| r.body["requestNumber"] == 2)
        .unwrap();
    assert_eq!(racing.body["raceCondition"], true);
    assert_eq!(
        racing.body["explanation"],
        "Race condition exploited: 2 rapid requests processed with initial count 1"
    );

    let late = app.apply(VULN, "SAVE50", "198.51.100.4").await;
    assert_eq!(late.status, StatusCode::BAD_REQUEST);
    assert_eq!(late.body["error"], "This coupon has no uses left");
}

#[tokio::test]
async fn test_single_vulnerable_request_is_normal() {
    let app = helpers::TestApp::new();

    let resp = app.apply(VULN, "WELCOME20", "192.0.2.10").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["discount"], 20);
    assert_eq!(resp.body["requestNumber"], 1);
    assert_eq!(resp.body["raceCondition"], false);
    assert_eq!(resp.body["explanation"], "Single request processed normally");
    assert_eq!(resp.body["message"], "Coupon applied! $20 off");
}

#[tokio::test]
async fn test_concurrent_safe_requests_grant_exactly_one_use() {
    let app = helpers::TestApp::new();

    let responses = futures::future::join_all(
        (0..8).map(|i| {
            let client = format!("203.0.113.{i}");
            let app = &app;
            async move { app.apply(SAFE, "SAVE50", &client).await }
        }),
    )
    .await;

    let ok = responses.iter().filter(|r| r.status == StatusCode::OK).count();
    let exhausted = responses
        .iter()
        .filter(|r| r.status == StatusCode::BAD_REQUEST)
        .count();
    assert_eq!(ok, 1);
    assert_eq!(exhausted, 7);
    assert_eq!(app.remaining("SAVE50"), RemainingUses::Finite(0));

    let granted = responses.iter().find(|r| r.status == StatusCode::OK).unwrap();
    assert_eq!(granted.body["safe"], true);
    assert_eq!(granted.body["remaining"], 0);
    assert_eq!(granted.body["message"], "Coupon applied successfully! $50 off");
}

#[tokio::test]
async fn test_unlimited_coupon_always_succeeds() {
    let pacer = GatePacer::new().with_gate(SuspensionPoint::Processing, 3);
    let app = helpers::TestApp::with_pacer(pacer);

    let (a, b, c, d) = tokio::join!(
        app.apply(VULN, "3atwa", "ip"),
        app.apply(VULN, "3atwa", "ip"),
        app.apply(SAFE, "3atwa", "ip"),
        app.apply(VULN, "3atwa", "ip"),
    );

    for resp in [&a, &b, &d] {
        assert_eq!(resp.status, StatusCode::OK);
        assert_eq!(resp.body["discount"], 40);
        assert_eq!(resp.body["remaining"], -1);
        assert_eq!(resp.body["raceCondition"], false);
    }
    assert_eq!(c.status, StatusCode::OK);
    assert_eq!(c.body["remaining"], -1);
    assert_eq!(app.remaining("3atwa"), RemainingUses::Unlimited);
}

#[tokio::test]
async fn test_unknown_code_is_404_on_both_pipelines() {
    let pacer = GatePacer::new().with_gate(SuspensionPoint::AfterInitialRead, 2);
    let app = helpers::TestApp::with_pacer(pacer);

    let (vuln_a, vuln_b, unknown_vuln, unknown_safe, missing) = tokio::join!(
        app.apply(VULN, "SAVE50", "ip"),
        app.apply(VULN, "SAVE50", "ip"),
        app.apply(VULN, "NOPE", "ip"),
        app.apply(SAFE, "NOPE", "ip"),
        app.request("POST", SAFE, Some(serde_json::json!({})), Some("ip")),
    );

    assert_eq!(vuln_a.status, StatusCode::OK);
    assert_eq!(vuln_b.status, StatusCode::OK);
    for resp in [&unknown_vuln, &unknown_safe, &missing] {
        assert_eq!(resp.status, StatusCode::NOT_FOUND);
        assert_eq!(resp.body["error"], "Coupon not found");
        assert_eq!(resp.body["kind"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_request_windows_are_per_client() {
    let app = helpers::TestApp::new();

    let first = app.apply(VULN, "3atwa", "10.0.0.1").await;
    let other_client = app.apply(VULN, "3atwa", "10.0.0.2").await;
    let second = app.apply(VULN, "3atwa", "10.0.0.1").await;

    assert_eq!(first.body["requestNumber"], 1);
    assert_eq!(other_client.body["requestNumber"], 1);
    assert_eq!(second.body["requestNumber"], 2);
}

#[tokio::test]
async fn test_malformed_bodies_report_unknown_coupon() {
    let app = helpers::TestApp::new();

    for path in [VULN, SAFE] {
        let cases = [
            (None, ""),
            (Some("application/json"), ""),
            (Some("text/plain"), "SAVE50"),
            (Some("application/json"), r#"{"code":123}"#),
            (Some("application/json"), r#"{"code":"SAVE50""#),
        ];
        for (content_type, body) in cases {
            let resp = app
                .raw_request("POST", path, content_type, body, Some("ip"))
                .await;
            assert_eq!(
                resp.status,
                StatusCode::NOT_FOUND,
                "{path} {content_type:?} {body:?}"
            );
            assert_eq!(resp.body["error"], "Coupon not found");
            assert_eq!(resp.body["kind"], "NOT_FOUND");
        }
    }

    assert_eq!(app.remaining("SAVE50"), RemainingUses::Finite(1));
    assert!(app.state.engine.tracker().is_empty());
}

#[tokio::test]
async fn test_code_is_read_without_json_content_type() {
    let app = helpers::TestApp::new();

    let resp = app
        .raw_request("POST", SAFE, None, r#"{"code":"WELCOME20"}"#, Some("ip"))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["discount"], 20);
}
