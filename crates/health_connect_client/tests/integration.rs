use chrono::{TimeZone, Utc};
use health_connect_client::http_client::ReqwestHealthConnectClient;
use health_connect_client::{
    HealthConnectClient, HealthConnectError, Permission, RecordType, TimeRangeFilter,
};
use secrecy::SecretString;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestHealthConnectClient {
    ReqwestHealthConnectClient::new(&server.uri(), SecretString::new("tok".into()))
}

fn march_first() -> TimeRangeFilter {
    TimeRangeFilter::between(
        Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().expect("start"),
        Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).single().expect("end")
            + chrono::Duration::milliseconds(999),
    )
}

#[tokio::test]
async fn read_records_posts_filter_and_sends_bearer_auth() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "records": [
            {"startTime": "2024-03-01T08:00:00Z", "endTime": "2024-03-01T09:00:00Z", "count": 3000},
            {"startTime": "2024-03-01T12:00:00Z", "endTime": "2024-03-01T13:00:00Z", "count": 4521}
        ]
    });
    Mock::given(method("POST"))
        .and(path("/v1/records/Steps/read"))
        .and(body_partial_json(
            serde_json::json!({"timeRangeFilter": {"operator": "between"}}),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let resp = client
        .read_records(RecordType::Steps, &march_first())
        .await
        .expect("records");
    assert_eq!(resp.records.len(), 2);
    assert_eq!(resp.records[1].count, Some(4521));

    let received = server.received_requests().await.expect("requests");
    assert!(!received.is_empty());
    let auth = received[0]
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(auth.starts_with("Bearer "));
}

#[tokio::test]
async fn read_records_maps_forbidden_to_denied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/records/HeartRate/read"))
        .respond_with(ResponseTemplate::new(403).set_body_string("read not granted"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .read_records(RecordType::HeartRate, &march_first())
        .await
        .expect_err("should fail");
    assert!(matches!(err, HealthConnectError::Denied(_)));
}

#[tokio::test]
async fn read_records_maps_server_error_to_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/records/Weight/read"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .read_records(RecordType::Weight, &march_first())
        .await
        .expect_err("should fail");
    match err {
        HealthConnectError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn initialize_reports_availability() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"available": false})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(!client.initialize().await.expect("status"));
}

#[tokio::test]
async fn initialize_maps_service_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/status"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.initialize().await.expect_err("should fail");
    assert!(matches!(err, HealthConnectError::Unavailable(_)));
}

#[tokio::test]
async fn request_permissions_round_trips_grant() {
    let server = MockServer::start().await;
    let requested = Permission::read_all();
    let granted_body = serde_json::to_value(&requested).expect("serialize");
    Mock::given(method("POST"))
        .and(path("/v1/permissions/request"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&granted_body))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let granted = client
        .request_permissions(&requested)
        .await
        .expect("granted");
    assert_eq!(granted, requested);
}
