//! API integration tests
//!
//! Drive the full router in-process with a pinned sample seed, so the
//! dataset under test is identical on every run.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use pulse_server::core::{Config, ServerState};

fn test_state() -> ServerState {
    let config = Config {
        http_port: 0,
        environment: "test".into(),
        sample_seed: 42,
        sample_feedback_count: 100,
        log_dir: None,
    };
    ServerState::initialize(&config)
}

fn app() -> Router {
    pulse_server::api::create_app(test_state())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_dataset_counts() {
    let app = app();
    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["dataset"]["feedback"], 100);
    assert_eq!(body["dataset"]["users"], 3);
    assert_eq!(body["dataset"]["zones"], 8);
}

#[tokio::test]
async fn dashboard_histogram_partitions_feedback() {
    let app = app();
    let (status, body) = get_json(&app, "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);

    let total = body["overview"]["totalFeedback"].as_u64().unwrap();
    assert_eq!(total, 100);

    let buckets = body["hotelStats"]["feedbackByRating"].as_array().unwrap();
    assert_eq!(buckets.len(), 5);
    let ratings: Vec<u64> = buckets
        .iter()
        .map(|b| b["rating"].as_u64().unwrap())
        .collect();
    assert_eq!(ratings, vec![1, 2, 3, 4, 5]);
    let bucket_sum: u64 = buckets.iter().map(|b| b["count"].as_u64().unwrap()).sum();
    assert_eq!(bucket_sum, total);

    let trend = body["hotelStats"]["feedbackOverTime"].as_array().unwrap();
    assert_eq!(trend.len(), 7);

    let top_zones = body["topZones"].as_array().unwrap();
    assert!(top_zones.len() <= 3);
}

#[tokio::test]
async fn feedback_list_applies_both_filters_in_order() {
    let app = app();
    let (status, body) = get_json(&app, "/api/feedback?zone=2&rating=5").await;
    assert_eq!(status, StatusCode::OK);

    let items = body.as_array().unwrap();
    let mut previous: Option<chrono::DateTime<chrono::Utc>> = None;
    for item in items {
        assert_eq!(item["zoneId"], "2");
        assert_eq!(item["rating"], 5);
        assert_eq!(item["zoneName"], "Lobby");
        // Newest first
        let created = item["createdAt"]
            .as_str()
            .unwrap()
            .parse::<chrono::DateTime<chrono::Utc>>()
            .unwrap();
        if let Some(prev) = previous {
            assert!(prev >= created);
        }
        previous = Some(created);
    }
}

#[tokio::test]
async fn low_rating_submission_flows_into_the_alert_worklist() {
    let app = app();

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/feedback",
        json!({
            "qrCodeId": "1",
            "zoneId": "1",
            "rating": 1,
            "comment": "The soup was cold"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let feedback_id = created["id"].as_str().unwrap();

    // The derived alert is new, unassigned, and sorted to the front
    let (status, alerts) = get_json(&app, "/api/alerts?status=new").await;
    assert_eq!(status, StatusCode::OK);
    let alert = alerts
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["feedbackId"] == feedback_id)
        .expect("submission must derive an alert");
    assert_eq!(alert["status"], "new");
    assert_eq!(alert["rating"], 1);
    assert_eq!(alert["comment"], "The soup was cold");
    assert!(alert.get("assignedTo").is_none());
    let alert_id = alert["id"].as_str().unwrap().to_string();

    // Assign: new → in_progress
    let (status, assigned) = send_json(
        &app,
        "POST",
        &format!("/api/alerts/{alert_id}/assign"),
        json!({ "userId": "3" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(assigned["status"], "in_progress");
    assert_eq!(assigned["assignedTo"], "3");

    // Resolve: in_progress → resolved, stamped
    let (status, resolved) = send_json(
        &app,
        "POST",
        &format!("/api/alerts/{alert_id}/resolve"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resolved["status"], "resolved");
    let stamp = resolved["resolvedAt"].as_str().unwrap().to_string();

    // Resolving again is a no-op: same stamp
    let (status, again) = send_json(
        &app,
        "POST",
        &format!("/api/alerts/{alert_id}/resolve"),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again["resolvedAt"].as_str().unwrap(), stamp);

    // Assigning a resolved alert is rejected
    let (status, body) = send_json(
        &app,
        "POST",
        &format!("/api/alerts/{alert_id}/assign"),
        json!({ "userId": "2" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "E0005");
}

#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let app = app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/feedback",
        json!({ "qrCodeId": "1", "zoneId": "1", "rating": 6 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn unknown_references_return_not_found() {
    let app = app();

    let (status, body) = get_json(&app, "/api/zones/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E0003");

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/alerts/999/resolve",
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/feedback",
        json!({ "qrCodeId": "404", "zoneId": "1", "rating": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn feedback_form_resolves_qr_and_zone() {
    let app = app();
    let (status, body) = get_json(&app, "/api/feedback-form?qr=1&z=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hotelName"], "Grand Hotel & Spa");
    assert_eq!(body["zoneName"], "Main Restaurant");
    assert_eq!(body["questions"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn feedback_form_falls_back_to_defaults() {
    let app = app();
    let (status, body) = get_json(&app, "/api/feedback-form").await;
    assert_eq!(status, StatusCode::OK);
    // No zone: branding falls back to the primary hotel
    assert_eq!(body["hotelName"], "Grand Hotel & Spa");
    assert_eq!(body["zoneName"], "Our Hotel");
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert_eq!(questions[0]["type"], "rating");
    assert_eq!(questions[1]["type"], "multiple_choice");
    assert_eq!(questions[2]["type"], "text");
}

#[tokio::test]
async fn zone_creation_round_trip() {
    let app = app();
    let (status, zone) = send_json(
        &app,
        "POST",
        "/api/zones",
        json!({
            "hotelId": "1",
            "name": "Rooftop Bar",
            "description": "Evening cocktails",
            "type": "other"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(zone["name"], "Rooftop Bar");
    let id = zone["id"].as_str().unwrap();

    let (status, fetched) = get_json(&app, &format!("/api/zones/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["type"], "other");
}

#[tokio::test]
async fn qrcode_listing_filters_by_zone() {
    let app = app();
    let (status, body) = get_json(&app, "/api/qrcodes?zone=1").await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Restaurant Table Cards");
}

#[tokio::test]
async fn team_member_creation_validates_email() {
    let app = app();
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/team",
        json!({ "name": "Maria Lopez", "email": "not-an-email", "role": "staff" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E0002");

    let (status, user) = send_json(
        &app,
        "POST",
        "/api/team",
        json!({ "name": "Maria Lopez", "email": "maria@grandhotel.com", "role": "staff" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["role"], "staff");
}

#[tokio::test]
async fn settings_update_merges_fields() {
    let app = app();
    let (status, updated) = send_json(
        &app,
        "PUT",
        "/api/settings/hotel",
        json!({ "name": "Grand Hotel" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Grand Hotel");
    assert_eq!(updated["city"], "San Francisco");
}
