mod common;

use rcodezero_sdk::{ListOptions, ZoneCreate, ZoneEdit};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn list_returns_zones_from_paginated_response() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/zones"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::paginated(common::sample_zone())),
        )
        .mount(&server)
        .await;

    let page = client
        .zones()
        .list(&ListOptions::default())
        .await
        .expect("Zones.list returned error");

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].domain, "testzone1.at");
    assert_eq!(page.data[0].zone_type, "SLAVE");
    assert_eq!(page.data[0].dnssec.as_deref(), Some("yes"));
    assert_eq!(page.data[0].masters, vec!["193.0.2.2", "2001:db8::2"]);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.total, Some(2));
}

#[tokio::test]
async fn list_all_walks_every_page() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/zones"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"domain": "testzone1.at", "type": "MASTER"}],
            "current_page": 1,
            "last_page": 2,
            "total": 2
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/zones"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"domain": "testzone2.at", "type": "SLAVE"}],
            "current_page": 2,
            "last_page": 2,
            "total": 2
        })))
        .mount(&server)
        .await;

    let zones = client
        .zones()
        .list_all()
        .await
        .expect("Zones.list_all returned error");

    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].domain, "testzone1.at");
    assert_eq!(zones[1].domain, "testzone2.at");
}

#[tokio::test]
async fn get_returns_single_zone() {
    let (server, client) = common::setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/zones/testzone1.at"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::sample_zone()))
        .mount(&server)
        .await;

    let zone = client
        .zones()
        .get("testzone1.at")
        .await
        .expect("Zones.get returned error");

    assert_eq!(zone.domain, "testzone1.at");
    assert_eq!(zone.serial.as_deref(), Some("20180411"));
    assert_eq!(
        zone.created.map(|dt| dt.to_rfc3339()),
        Some("2018-04-09T09:27:31+00:00".to_string())
    );
}

#[tokio::test]
async fn create_posts_zone_payload() {
    let (server, client) = common::setup().await;

    let zone_create = ZoneCreate {
        domain: "testzone1.at".to_string(),
        zone_type: "slave".to_string(),
        masters: vec!["193.0.2.2".to_string(), "2001:db8::2".to_string()],
    };

    Mock::given(method("POST"))
        .and(path("/api/v1/zones"))
        .and(body_json(json!({
            "domain": "testzone1.at",
            "type": "slave",
            "masters": ["193.0.2.2", "2001:db8::2"]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::status_ok("Zone testzone1.at successfully added")),
        )
        .mount(&server)
        .await;

    let status = client
        .zones()
        .create(&zone_create)
        .await
        .expect("Zones.create returned error");

    assert!(status.is_ok());
    assert_eq!(status.message, "Zone testzone1.at successfully added");
}

#[tokio::test]
async fn edit_puts_zone_payload() {
    let (server, client) = common::setup().await;

    let zone_edit = ZoneEdit {
        zone_type: "slave".to_string(),
        masters: vec!["193.0.2.2".to_string(), "2001:db8::2".to_string()],
    };

    Mock::given(method("PUT"))
        .and(path("/api/v1/zones/testzone1.at"))
        .and(body_json(json!({
            "type": "slave",
            "masters": ["193.0.2.2", "2001:db8::2"]
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::status_ok("Zone testzone1.at successfully updated")),
        )
        .mount(&server)
        .await;

    let status = client
        .zones()
        .edit("testzone1.at", &zone_edit)
        .await
        .expect("Zones.edit returned error");

    assert!(status.is_ok());
    assert_eq!(status.message, "Zone testzone1.at successfully updated");
}

#[tokio::test]
async fn delete_removes_zone() {
    let (server, client) = common::setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/zones/testzone1.at"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::status_ok("Zone testzone1.at successfully removed")),
        )
        .mount(&server)
        .await;

    let status = client
        .zones()
        .delete("testzone1.at")
        .await
        .expect("Zones.delete returned error");

    assert!(status.is_ok());
    assert_eq!(status.message, "Zone testzone1.at successfully removed");
}

#[tokio::test]
async fn transfer_queues_zone_retrieve() {
    let (server, client) = common::setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/zones/testzone1.at/retrieve"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::status_ok("Zonetransfer for zone testzone1.at queued")),
        )
        .mount(&server)
        .await;

    let status = client
        .zones()
        .transfer("testzone1.at")
        .await
        .expect("Zones.transfer returned error");

    assert!(status.is_ok());
    assert_eq!(status.message, "Zonetransfer for zone testzone1.at queued");
}
