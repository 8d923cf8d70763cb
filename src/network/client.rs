use crate::config::constants::REQUEST_TIMEOUT;
use crate::network::errors::TransportError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;
use url::Url;

// * JSON-over-POST transport bound to one API host.
// * Non-2xx responses are returned as ordinary bodies; callers judge them by `responseStatus`.
pub struct ApiClient {
    inner: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: Url) -> Result<Self, TransportError> {
        Self::with_timeout(base, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base: Url, timeout: Duration) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Client(e.without_url()))?;

        Ok(Self {
            inner: client,
            base,
        })
    }

    // * POSTs `body` as JSON to `endpoint` and returns the raw response text
    pub async fn post<B>(&self, endpoint: &str, body: &B) -> Result<String, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(body).map_err(TransportError::Encode)?;
        let url = self.endpoint_url(endpoint);

        let resp = self.inner.post(url).body(payload).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        debug!(endpoint, status = status.as_u16(), bytes = text.len(), "API response received");
        Ok(text)
    }

    fn endpoint_url(&self, endpoint: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(endpoint);
        url
    }
}
