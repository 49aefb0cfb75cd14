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

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::{Client, ListOptions, Page, StatusResponse};
use crate::endpoint;
use crate::error::Result;

/// Resource record sets within a zone.
///
/// The API multiplexes all modifications through PATCH: each entry of the
/// submitted change set names the record set it touches and carries a
/// [`ChangeType`].
pub struct RRSetService<'c> {
    client: &'c Client,
}

/// A record set (name, type, TTL and records) as the API reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RRSet {
    pub name: String,
    #[serde(rename = "type")]
    pub rtype: String,
    pub ttl: u32,
    #[serde(default)]
    pub records: Vec<Record>,
}

/// A single record within a record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub content: String,
    #[serde(default)]
    pub disabled: bool,
}

/// What a change-set entry does with the record set it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Add,
    Update,
    Delete,
}

/// One entry of a PATCH change set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RRSetEdit {
    pub name: String,
    #[serde(rename = "type")]
    pub rtype: String,
    pub changetype: ChangeType,
    /// Required by the API for `add` and `update`, ignored for `delete`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    pub records: Vec<Record>,
}

impl<'c> RRSetService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Fetches one page of the record sets of a zone.
    ///
    /// rcode0 API docs: https://my.rcodezero.at/api-doc/#api-zone-management-rrsets-get
    pub async fn list(&self, zone: &str, options: &ListOptions) -> Result<Page<RRSet>> {
        let url = format!(
            "{}?page={}&per_page={}",
            self.client
                .endpoint_url(endpoint::ZONE_RRSETS, &[("zone", zone)]),
            options.page,
            options.per_page
        );

        self.client.request_json(Method::GET, url, None).await
    }

    /// Fetches every record set of a zone across all pages.
    pub async fn list_all(&self, zone: &str) -> Result<Vec<RRSet>> {
        self.client
            .collect_pages(
                self.client
                    .endpoint_url(endpoint::ZONE_RRSETS, &[("zone", zone)]),
            )
            .await
    }

    /// Submits a change set adding new record sets.
    pub async fn create(&self, zone: &str, changes: &[RRSetEdit]) -> Result<StatusResponse> {
        self.patch(zone, changes).await
    }

    /// Submits a change set replacing existing record sets.
    pub async fn edit(&self, zone: &str, changes: &[RRSetEdit]) -> Result<StatusResponse> {
        self.patch(zone, changes).await
    }

    /// Submits a change set removing record sets.
    pub async fn delete(&self, zone: &str, changes: &[RRSetEdit]) -> Result<StatusResponse> {
        self.patch(zone, changes).await
    }

    async fn patch(&self, zone: &str, changes: &[RRSetEdit]) -> Result<StatusResponse> {
        let url = self
            .client
            .endpoint_url(endpoint::ZONE_RRSETS, &[("zone", zone)]);
        let body = serde_json::to_string(changes)?;

        self.client.request_json(Method::PATCH, url, Some(body)).await
    }
}
