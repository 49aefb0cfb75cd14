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
use serde::Deserialize;

use crate::client::{Client, ListOptions, Page};
use crate::endpoint;
use crate::error::Result;
use crate::utils::serde_utils::datetime_or_none;

/// Account reports.
pub struct ReportService<'c> {
    client: &'c Client,
}

/// A zone flagged as problematic, e.g. because transfers keep failing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProblematicZone {
    pub domain: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    #[serde(default)]
    pub dnssec: Option<String>,
    #[serde(default, deserialize_with = "datetime_or_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub masters: Vec<String>,
}

impl<'c> ReportService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Fetches one page of the problematic-zones report.
    pub async fn problematic_zones(&self, options: &ListOptions) -> Result<Page<ProblematicZone>> {
        let url = format!(
            "{}?page={}&per_page={}",
            self.client
                .endpoint_url(endpoint::REPORT_PROBLEMATIC_ZONES, &[]),
            options.page,
            options.per_page
        );

        self.client.request_json(Method::GET, url, None).await
    }

    /// Fetches the whole problematic-zones report across all pages.
    pub async fn problematic_zones_all(&self) -> Result<Vec<ProblematicZone>> {
        self.client
            .collect_pages(
                self.client
                    .endpoint_url(endpoint::REPORT_PROBLEMATIC_ZONES, &[]),
            )
            .await
    }
}
