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

use crate::client::{Client, StatusResponse};
use crate::endpoint;
use crate::error::Result;

/// DNSSEC operations, exposed by the API as remote actions on a zone.
pub struct DnssecService<'c> {
    client: &'c Client,
}

impl<'c> DnssecService<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Starts serving the zone signed.
    ///
    /// rcode0 API docs: https://my.rcodezero.at/api-doc/#api-dnssec-sign-post
    pub async fn sign(&self, zone: &str) -> Result<StatusResponse> {
        self.post_action(endpoint::DNSSEC_SIGN, zone).await
    }

    /// Reverts the zone to unsigned.
    pub async fn unsign(&self, zone: &str) -> Result<StatusResponse> {
        self.post_action(endpoint::DNSSEC_UNSIGN, zone).await
    }

    /// Starts a key rollover for the zone.
    pub async fn key_rollover(&self, zone: &str) -> Result<StatusResponse> {
        self.post_action(endpoint::DNSSEC_KEY_ROLLOVER, zone).await
    }

    /// Acknowledges that the DS record of the current KSK has been placed
    /// in the parent zone.
    pub async fn ds_update(&self, zone: &str) -> Result<StatusResponse> {
        self.post_action(endpoint::DNSSEC_DS_UPDATE, zone).await
    }

    /// Simulates a DSSEEN event. Only available for test zones.
    pub async fn simulate_ds_seen(&self, zone: &str) -> Result<StatusResponse> {
        self.post_action(endpoint::DNSSEC_SIMULATE_DS_SEEN, zone)
            .await
    }

    /// Simulates a DSREMOVED event. Only available for test zones.
    pub async fn simulate_ds_removed(&self, zone: &str) -> Result<StatusResponse> {
        self.post_action(endpoint::DNSSEC_SIMULATE_DS_REMOVED, zone)
            .await
    }

    async fn post_action(&self, template: &str, zone: &str) -> Result<StatusResponse> {
        let url = self.client.endpoint_url(template, &[("zone", zone)]);

        self.client.request_json(Method::POST, url, None).await
    }
}
