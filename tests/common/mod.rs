#![allow(dead_code)]

use rcodezero_sdk::Client;
use serde_json::{Value, json};
use wiremock::MockServer;

/// Spins up a mock API server and a client pointed at it, with the same
/// `<server>/api/<version>` layout as the production deployment.
pub async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;

    let client = Client::builder()
        .token("test123")
        .base_url(&format!("{}/api/", server.uri()))
        .build()
        .expect("client should build against the mock server");

    (server, client)
}

pub fn sample_zone() -> Value {
    json!({
        "domain": "testzone1.at",
        "type": "SLAVE",
        "dnssec": "yes",
        "created": "2018-04-09T09:27:31Z",
        "serial": "20180411",
        "masters": ["193.0.2.2", "2001:db8::2"]
    })
}

pub fn sample_rrset() -> Value {
    json!({
        "name": "www.testzone1.at.",
        "type": "A",
        "ttl": 3600,
        "records": [{"content": "10.10.0.2", "disabled": false}]
    })
}

/// Wraps `data` in a single-page pagination envelope as the list endpoints
/// answer it.
pub fn paginated(data: Value) -> Value {
    json!({
        "data": [data],
        "current_page": 1,
        "from": 1,
        "last_page": 1,
        "next_page_url": null,
        "path": "https://my.rcodezero.at/api/v1/zones",
        "per_page": 100,
        "prev_page_url": null,
        "to": 2,
        "total": 2
    })
}

pub fn status_ok(message: &str) -> Value {
    json!({"status": "ok", "message": message})
}
