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
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::endpoint;
use crate::error::{Error, Result};
use crate::services::account_stats::AccountStatsService;
use crate::services::dnssec::DnssecService;
use crate::services::message::MessageService;
use crate::services::report::ReportService;
use crate::services::rrset::RRSetService;
use crate::services::settings::SettingsService;
use crate::services::zone::ZoneService;
use crate::services::zone_stats::ZoneStatsService;
use crate::utils::request::{ApiHttpClient, DefaultApiClient};

const DEFAULT_BASE_URL: &str = "https://my.rcodezero.at/api/";
const DEFAULT_API_VERSION: &str = "v1";
const DEFAULT_USER_AGENT: &str = "rcodezero-sdk";

/// Rate-limit headers attached to every API response. The client surfaces
/// their names but does not act on them.
pub const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
pub const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";

/// Entry point to the RcodeZero API.
///
/// Holds the connection settings shared by all per-resource services and
/// performs the request/response plumbing on their behalf. Services are
/// obtained through accessors:
///
/// ```no_run
/// # async fn run() -> Result<(), rcodezero_sdk::Error> {
/// let client = rcodezero_sdk::Client::new("your-api-token")?;
/// let status = client.dnssec().sign("example.at").await?;
/// # Ok(())
/// # }
/// ```
pub struct Client {
    /// Base URL for API requests, always with a trailing slash.
    base_url: Url,
    /// Version segment appended to the base URL (`v1`).
    api_version: String,
    /// Bearer token authenticating every request.
    token: String,
    /// User agent reported to the API.
    user_agent: String,
    /// Transport the requests are fired over.
    http_client: Box<dyn ApiHttpClient>,
}

impl Client {
    /// Creates a client for the production API with default settings.
    ///
    /// Fails with [`Error::TokenMissing`] if `token` is empty.
    pub fn new(token: &str) -> Result<Self> {
        Self::builder().token(token).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Zone management.
    pub fn zones(&self) -> ZoneService<'_> {
        ZoneService::new(self)
    }

    /// Resource record sets within a zone.
    pub fn rrsets(&self) -> RRSetService<'_> {
        RRSetService::new(self)
    }

    /// DNSSEC signing operations.
    pub fn dnssec(&self) -> DnssecService<'_> {
        DnssecService::new(self)
    }

    /// Query statistics for a single zone.
    pub fn zone_stats(&self) -> ZoneStatsService<'_> {
        ZoneStatsService::new(self)
    }

    /// Query statistics aggregated over the whole account.
    pub fn account_stats(&self) -> AccountStatsService<'_> {
        AccountStatsService::new(self)
    }

    /// Account-wide settings.
    pub fn settings(&self) -> SettingsService<'_> {
        SettingsService::new(self)
    }

    /// Account notifications.
    pub fn messages(&self) -> MessageService<'_> {
        MessageService::new(self)
    }

    /// Account reports.
    pub fn reports(&self) -> ReportService<'_> {
        ReportService::new(self)
    }

    /// Renders `template` against `params` and prefixes base URL + version.
    pub(crate) fn endpoint_url(&self, template: &str, params: &[(&str, &str)]) -> String {
        format!(
            "{}{}{}",
            self.base_url,
            self.api_version,
            endpoint::interpolate(template, params)
        )
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))?,
        );
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        Ok(headers)
    }

    /// Fires a request and decodes the JSON body into `T`.
    ///
    /// The body is decoded whatever the HTTP status was; the API reports
    /// failures inside the status envelope, not through status codes.
    pub(crate) async fn request_json<T>(
        &self,
        method: Method,
        url: String,
        body: Option<String>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let headers = self.headers()?;
        let value = self.http_client.request(method, url, headers, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Walks a paginated endpoint page by page and collects all items.
    pub(crate) async fn collect_pages<T>(&self, base: String) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut options = ListOptions::default();
        let mut items = Vec::new();

        loop {
            let url = format!(
                "{}?page={}&per_page={}",
                base, options.page, options.per_page
            );
            let page: Page<T> = self.request_json(Method::GET, url, None).await?;

            items.extend(page.data);

            if page.current_page >= page.last_page {
                break;
            }

            options.page = page.current_page + 1;
        }

        Ok(items)
    }
}

/// Configures and builds a [`Client`].
///
/// Only the token is mandatory; everything else defaults to the production
/// API.
pub struct ClientBuilder {
    token: Option<String>,
    base_url: String,
    api_version: String,
    user_agent: String,
    http_client: Option<Box<dyn ApiHttpClient>>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
        }
    }
}

impl ClientBuilder {
    /// Bearer token of the RcodeZero account.
    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    /// Overrides the API base URL, e.g. to point at a test deployment.
    /// A trailing slash is appended if missing.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Swaps in a custom transport instead of the bundled reqwest client.
    pub fn http_client(mut self, http_client: impl ApiHttpClient + 'static) -> Self {
        self.http_client = Some(Box::new(http_client));
        self
    }

    pub fn build(self) -> Result<Client> {
        let token = match self.token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(Error::TokenMissing),
        };

        let mut base_url = self.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Client {
            base_url: Url::parse(&base_url)?,
            api_version: self.api_version,
            token,
            user_agent: self.user_agent,
            http_client: self
                .http_client
                .unwrap_or_else(|| Box::new(DefaultApiClient::new())),
        })
    }
}

/// Status envelope returned by every action endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl StatusResponse {
    /// Whether the API reported the action as successful.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// One page of a paginated list response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub from: Option<u32>,
    #[serde(default)]
    pub last_page: u32,
    #[serde(default)]
    pub next_page_url: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub prev_page_url: Option<String>,
    #[serde(default)]
    pub to: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
}

/// Page selection for paginated list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub page: u32,
    pub per_page: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 100,
        }
    }
}
