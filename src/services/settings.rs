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
use serde_json::json;

use crate::client::{Client, StatusResponse};
use crate::endpoint;
use crate::error::Result;

/// Account-wide settings: secondary servers notified on zone changes and
/// the TSIG key for outbound transfers.
pub struct SettingsService<'c> {
    client: &'c Client,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GlobalSettings {
    /// Secondary name servers notified after zone updates.
    #[serde(default)]
    pub secondaries: Option<Vec<String>>,
    /// TSIG key securing outbound zone transfers, as
    /// `name,algorithm,base64-key`.
    #[serde(default)]
    pub tsigout: Option<String>,
}

impl<'c> SettingsService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Fetches the current account settings.
    pub async fn get(&self) -> Result<GlobalSettings> {
        let url = self.client.endpoint_url(endpoint::ACC_SETTINGS, &[]);

        self.client.request_json(Method::GET, url, None).await
    }

    /// Replaces the configured secondary servers.
    pub async fn set_secondaries(&self, secondaries: &[String]) -> Result<StatusResponse> {
        let url = self.client.endpoint_url(endpoint::ACC_SECONDARIES, &[]);
        let body = json!({ "secondaries": secondaries }).to_string();

        self.client.request_json(Method::PUT, url, Some(body)).await
    }

    /// Removes all configured secondary servers.
    pub async fn remove_secondaries(&self) -> Result<StatusResponse> {
        let url = self.client.endpoint_url(endpoint::ACC_SECONDARIES, &[]);

        self.client.request_json(Method::DELETE, url, None).await
    }

    /// Sets the TSIG key used for outbound zone transfers.
    pub async fn set_tsig(&self, tsigkey: &str) -> Result<StatusResponse> {
        let url = self.client.endpoint_url(endpoint::ACC_TSIGOUT, &[]);
        let body = json!({ "tsigkey": tsigkey }).to_string();

        self.client.request_json(Method::PUT, url, Some(body)).await
    }

    /// Removes the TSIG key, disabling transfer signing.
    pub async fn remove_tsig(&self) -> Result<StatusResponse> {
        let url = self.client.endpoint_url(endpoint::ACC_TSIGOUT, &[]);

        self.client.request_json(Method::DELETE, url, None).await
    }
}
