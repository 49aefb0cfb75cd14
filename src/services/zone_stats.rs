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
use serde::Deserialize;

use crate::client::Client;
use crate::endpoint;
use crate::error::Result;

/// Query statistics of a single zone.
///
/// All endpoints answer with a bare JSON array, one entry per day or per
/// name. Stats dates are day-granular and not zero-padded by the API
/// (`2018-3-2`), so they stay strings.
pub struct ZoneStatsService<'c> {
    client: &'c Client,
}

/// Queries and NXDOMAIN answers of one day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryStat {
    pub date: String,
    pub queries: u64,
    pub nxdomains: u64,
}

/// DNS magnitude of the zone on one day, as a decimal string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Magnitude {
    pub date: String,
    pub magnitude: String,
}

/// Count of queries for one name/type pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryName {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub count: u64,
}

/// Count of NXDOMAIN answers for one name/type pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NxDomain {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub count: u64,
}

impl<'c> ZoneStatsService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Per-day query counts for the zone.
    pub async fn queries(&self, zone: &str) -> Result<Vec<QueryStat>> {
        self.get_stats(endpoint::ZONE_STATS_QUERIES, zone).await
    }

    /// Per-day DNS magnitude of the zone.
    pub async fn magnitude(&self, zone: &str) -> Result<Vec<Magnitude>> {
        self.get_stats(endpoint::ZONE_STATS_MAGNITUDE, zone).await
    }

    /// Most queried names of the zone.
    pub async fn qnames(&self, zone: &str) -> Result<Vec<QueryName>> {
        self.get_stats(endpoint::ZONE_STATS_QNAMES, zone).await
    }

    /// Names of the zone answered with NXDOMAIN most often.
    pub async fn nxdomains(&self, zone: &str) -> Result<Vec<NxDomain>> {
        self.get_stats(endpoint::ZONE_STATS_NXDOMAINS, zone).await
    }

    async fn get_stats<T>(&self, template: &str, zone: &str) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.client.endpoint_url(template, &[("zone", zone)]);

        self.client.request_json(Method::GET, url, None).await
    }
}
