// Copyright 2025 rcodezero-sdk authors
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{Client, ListOptions, Page, StatusResponse};
use crate::endpoint;
use crate::error::Result;
use crate::utils::serde_utils::datetime_or_none;

/// Management of the zones provisioned for the account.
pub struct ZoneService<'c> {
    client: &'c Client,
}

/// A DNS zone as the API reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Zone {
    #[serde(default)]
    pub id: Option<u64>,
    pub domain: String,
    /// `master` or `slave`; the API answers in uppercase on some endpoints.
    #[serde(rename = "type")]
    pub zone_type: String,
    /// `yes` once the zone is signed.
    #[serde(default)]
    pub dnssec: Option<String>,
    #[serde(default, deserialize_with = "datetime_or_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last successful transfer check, only set for slave zones.
    #[serde(default, deserialize_with = "datetime_or_none")]
    pub last_check: Option<DateTime<Utc>>,
    #[serde(default)]
    pub serial: Option<String>,
    /// Master servers the zone is transferred from, only set for slave zones.
    #[serde(default)]
    pub masters: Vec<String>,
}

/// Payload for adding a zone to the account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCreate {
    pub domain: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    pub masters: Vec<String>,
}

/// Payload for changing the type or masters of an existing zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneEdit {
    #[serde(rename = "type")]
    pub zone_type: String,
    pub masters: Vec<String>,
}

impl<'c> ZoneService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Fetches one page of the managed zones.
    ///
    /// rcode0 API docs: https://my.rcodezero.at/api-doc/#api-zone-management-zones-get
    pub async fn list(&self, options: &ListOptions) -> Result<Page<Zone>> {
        let url = format!(
            "{}?page={}&per_page={}",
            self.client.endpoint_url(endpoint::ZONES, &[]),
            options.page,
            options.per_page
        );

        self.client.request_json(Method::GET, url, None).await
    }

    /// Fetches every managed zone, following the pagination to the last page.
    pub async fn list_all(&self) -> Result<Vec<Zone>> {
        self.client
            .collect_pages(self.client.endpoint_url(endpoint::ZONES, &[]))
            .await
    }

    /// Fetches a single zone by name.
    pub async fn get(&self, zone: &str) -> Result<Zone> {
        let url = self.client.endpoint_url(endpoint::ZONE, &[("zone", zone)]);

        self.client.request_json(Method::GET, url, None).await
    }

    /// Adds a new master or slave zone to the account.
    ///
    /// rcode0 API docs: https://my.rcodezero.at/api-doc/#api-zone-management-zones-post
    pub async fn create(&self, zone_create: &ZoneCreate) -> Result<StatusResponse> {
        let url = self.client.endpoint_url(endpoint::ZONES, &[]);
        let body = serde_json::to_string(zone_create)?;

        self.client.request_json(Method::POST, url, Some(body)).await
    }

    /// Changes the type or master servers of a zone.
    pub async fn edit(&self, zone: &str, zone_edit: &ZoneEdit) -> Result<StatusResponse> {
        let url = self.client.endpoint_url(endpoint::ZONE, &[("zone", zone)]);
        let body = serde_json::to_string(zone_edit)?;

        self.client.request_json(Method::PUT, url, Some(body)).await
    }

    /// Removes a zone from the account.
    pub async fn delete(&self, zone: &str) -> Result<StatusResponse> {
        let url = self.client.endpoint_url(endpoint::ZONE, &[("zone", zone)]);

        self.client.request_json(Method::DELETE, url, None).await
    }

    /// Queues a zone transfer (AXFR retrieve) for a slave zone.
    pub async fn transfer(&self, zone: &str) -> Result<StatusResponse> {
        let url = self
            .client
            .endpoint_url(endpoint::ZONE_TRANSFER, &[("zone", zone)]);

        self.client.request_json(Method::POST, url, None).await
    }
}
