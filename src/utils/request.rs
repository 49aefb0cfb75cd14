use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Method, header::HeaderMap};
use serde_json::Value;

use crate::error::Error;

/// Transport the API client fires its requests over.
///
/// The default implementation wraps reqwest; a custom implementation can be
/// plugged in through the client builder, e.g. to record traffic.
#[async_trait]
pub trait ApiHttpClient: Send + Sync {
    async fn request(
        &self,
        method: Method,
        url: String,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<Value, Error>;
}

pub struct DefaultApiClient {
    inner: Client,
}

impl DefaultApiClient {
    pub fn new() -> Self {
        Self {
            inner: Client::new(),
        }
    }
}

impl Default for DefaultApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiHttpClient for DefaultApiClient {
    async fn request(
        &self,
        method: Method,
        url: String,
        headers: HeaderMap,
        body: Option<String>,
    ) -> Result<Value, Error> {
        debug!("{} {}", method, url);

        let mut req = self.inner.request(method, url).headers(headers);
        if let Some(body) = body {
            req = req.body(body);
        }

        let response = req.send().await?;
        debug!("api answered {}", response.status());

        let text = response.text().await?;
        let json_value: Value = serde_json::from_str(&text)?;

        Ok(json_value)
    }
}
