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

use crate::client::{Client, StatusResponse};
use crate::endpoint;
use crate::error::Result;

/// Account notifications, e.g. DS records seen in or removed from a
/// parent zone.
pub struct MessageService<'c> {
    client: &'c Client,
}

/// One entry of the account notification feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub id: u64,
    pub domain: String,
    pub date: DateTime<Utc>,
    /// Notification kind, e.g. `DSSEEN` or `DSREMOVED`.
    #[serde(rename = "type")]
    pub kind: String,
    pub comment: String,
}

impl<'c> MessageService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Fetches the latest unacknowledged notification.
    pub async fn get_latest(&self) -> Result<Message> {
        let url = self.client.endpoint_url(endpoint::MESSAGES, &[]);

        self.client.request_json(Method::GET, url, None).await
    }

    /// Acknowledges a notification and removes it from the feed.
    pub async fn ack_and_delete(&self, id: u64) -> Result<StatusResponse> {
        let url = self
            .client
            .endpoint_url(endpoint::MESSAGE, &[("id", &id.to_string())]);

        self.client.request_json(Method::DELETE, url, None).await
    }
}
