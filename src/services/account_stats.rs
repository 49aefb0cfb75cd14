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
use crate::services::zone_stats::{NxDomain, QueryName};

/// Query statistics aggregated over all zones of the account.
///
/// Every operation takes the number of past days to aggregate, passed to
/// the API as the `days` query parameter.
pub struct AccountStatsService<'c> {
    client: &'c Client,
}

/// Account-wide query counts of one day.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryCount {
    pub date: String,
    pub count: u64,
    pub nxcount: u64,
}

/// Query count attributed to one country.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryQueryCount {
    pub country_code: String,
    pub country: String,
    pub region: String,
    pub subregion: String,
    pub query_count: u64,
}

/// Most queried name across the account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopQueryName {
    pub id: u64,
    pub domain: String,
    #[serde(flatten)]
    pub query: QueryName,
}

/// Name answered with NXDOMAIN most often across the account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopNxDomain {
    pub id: u64,
    pub domain: String,
    #[serde(flatten)]
    pub nxdomain: NxDomain,
}

/// Zone with the highest DNS magnitude in the account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopMagnitude {
    pub id: u64,
    pub domain: String,
    pub magnitude: f64,
}

/// Most queried zone of the account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopZone {
    pub id: u64,
    pub domain: String,
    pub count: u64,
}

impl<'c> AccountStatsService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Total query counts per day over the last `days` days.
    pub async fn total_query_count(&self, days: u32) -> Result<Vec<QueryCount>> {
        self.get_stats(endpoint::ACC_STATS_QUERIES, days).await
    }

    /// Query counts per origin country over the last `days` days.
    pub async fn total_query_count_per_country(&self, days: u32) -> Result<Vec<CountryQueryCount>> {
        self.get_stats(endpoint::ACC_STATS_COUNTRIES, days).await
    }

    /// Most queried names over the last `days` days.
    pub async fn top_qnames(&self, days: u32) -> Result<Vec<TopQueryName>> {
        self.get_stats(endpoint::ACC_STATS_TOP_QNAMES, days).await
    }

    /// Names answered with NXDOMAIN most often over the last `days` days.
    pub async fn top_nxdomains(&self, days: u32) -> Result<Vec<TopNxDomain>> {
        self.get_stats(endpoint::ACC_STATS_TOP_NXDOMAINS, days)
            .await
    }

    /// Zones with the highest DNS magnitude over the last `days` days.
    pub async fn top_magnitude(&self, days: u32) -> Result<Vec<TopMagnitude>> {
        self.get_stats(endpoint::ACC_STATS_TOP_MAGNITUDE, days)
            .await
    }

    /// Most queried zones over the last `days` days.
    pub async fn top_zones(&self, days: u32) -> Result<Vec<TopZone>> {
        self.get_stats(endpoint::ACC_STATS_TOP_ZONES, days).await
    }

    async fn get_stats<T>(&self, template: &str, days: u32) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}?days={}", self.client.endpoint_url(template, &[]), days);

        self.client.request_json(Method::GET, url, None).await
    }
}
