use health_daily::auth::{AuthError, LoginClient};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_posts_credentials_and_returns_a_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(
            serde_json::json!({"username": "alice", "password": "s3cret"}),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "welcome"})),
        )
        .mount(&server)
        .await;

    let client = LoginClient::new(&server.uri());
    let session = client.login("alice", "s3cret").await.expect("session");
    assert_eq!(session.username, "alice");
}

#[tokio::test]
async fn login_failure_surfaces_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let client = LoginClient::new(&server.uri());
    let err = client.login("alice", "wrong").await.expect_err("must fail");
    match err {
        AuthError::InvalidCredentials(msg) => assert_eq!(msg, "Invalid credentials"),
        other => panic!("expected InvalidCredentials, got {other}"),
    }
}

#[tokio::test]
async fn login_failure_without_a_body_uses_a_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = LoginClient::new(&server.uri());
    let err = client.login("alice", "s3cret").await.expect_err("must fail");
    assert!(matches!(err, AuthError::InvalidCredentials(msg) if msg == "invalid credentials"));
}
