mod common;

use rcodezero_sdk::Error;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn requests_carry_auth_and_agent_headers() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/settings"))
        .and(header("Authorization", "Bearer test123"))
        .and(header("Content-Type", "application/json"))
        .and(header("User-Agent", "rcodezero-sdk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let settings = client
        .settings()
        .get()
        .await
        .expect("request with default headers should match");

    assert!(settings.secondaries.is_none());
    assert!(settings.tsigout.is_none());
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client.settings().get().await.unwrap_err();

    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn error_status_body_is_decoded_not_classified() {
    let (server, client) = common::setup().await;

    // The API reports failures inside the envelope; the client decodes the
    // body regardless of the HTTP status code.
    Mock::given(method("POST"))
        .and(path("/api/v1/zones/unknown.at/sign"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "failed",
            "message": "Zone not found"
        })))
        .mount(&server)
        .await;

    let status = client
        .dnssec()
        .sign("unknown.at")
        .await
        .expect("body should decode despite the 404");

    assert!(!status.is_ok());
    assert_eq!(status.message, "Zone not found");
}

#[tokio::test]
async fn custom_user_agent_is_sent() {
    let server = wiremock::MockServer::start().await;

    let client = rcodezero_sdk::Client::builder()
        .token("test123")
        .base_url(&format!("{}/api/", server.uri()))
        .user_agent("my-integration/1.0")
        .build()
        .expect("client should build");

    Mock::given(method("GET"))
        .and(path("/api/v1/settings"))
        .and(header("User-Agent", "my-integration/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    client
        .settings()
        .get()
        .await
        .expect("request with custom user agent should match");
}
