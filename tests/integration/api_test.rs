//! REST surface tests.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_detailed_health_reports_hub_state() {
    let app = TestApp::new();
    let hub = &app.state.realtime.connections;
    hub.on_connected("c1".into(), Some("Alice")).await;
    hub.on_connected("c2".into(), None).await;

    let response = app.request("GET", "/api/health/detailed", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["ws_connections"], 2);
    assert_eq!(response.body["data"]["online_users"], 1);
    assert_eq!(response.body["data"]["metrics"]["connections_total"], 2);
}

#[tokio::test]
async fn test_presence_listing_is_sorted_and_hides_anonymous() {
    let app = TestApp::new();
    let hub = &app.state.realtime.connections;
    hub.on_connected("1".into(), Some("Oskar")).await;
    hub.on_connected("2".into(), Some("Bea")).await;
    hub.on_connected("3".into(), Some("Anonymous")).await;
    hub.update_status(&"1".into(), "Away").await.expect("valid");

    let response = app.request("GET", "/api/presence", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["users"],
        json!([
            {"user_name": "Bea", "status": "Online"},
            {"user_name": "Oskar", "status": "Away"}
        ])
    );
    assert_eq!(response.body["data"]["connections"], 3);
}

#[tokio::test]
async fn test_single_user_presence() {
    let app = TestApp::new();
    app.state
        .realtime
        .connections
        .on_connected("1".into(), Some("Bea"))
        .await;

    let found = app.request("GET", "/api/presence/Bea", None).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["data"]["status"], "Online");

    let missing = app.request("GET", "/api/presence/Nobody", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_notification_relay_counts_clients() {
    let app = TestApp::new();
    let (_handle, mut rx) = app.state.realtime.connections.register(Some("Alice")).await;
    while rx.try_recv().is_ok() {}

    let response = app
        .request(
            "POST",
            "/api/notifications",
            Some(json!({"message": "Inventory count starts now"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["delivered"], 1);

    let raw = rx.try_recv().expect("relayed");
    let msg: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(msg["type"], "notification");
    assert_eq!(msg["message"], "Inventory count starts now");
}

#[tokio::test]
async fn test_broadcast_validation() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/broadcast",
            Some(json!({"sender": "", "message": "hello"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let ok = app
        .request(
            "POST",
            "/api/broadcast",
            Some(json!({"sender": "HSEQ", "message": "Fire drill at 14:00"})),
        )
        .await;
    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(ok.body["data"]["delivered"], 0);
}
