use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::ProbeError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Issues the single status request. Client defaults (timeouts, redirects,
/// TLS roots) are left untouched.
pub struct StatusFetcher {
    client: Client,
}

impl StatusFetcher {
    pub fn new() -> Result<Self, ProbeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ProbeError::BuildRequest)?;
        Ok(Self { client })
    }

    /// GETs `url` with `credential` as the raw `Authorization` value and
    /// returns the whole body. The HTTP status is not checked; the response
    /// is fully consumed before returning.
    pub async fn fetch(&self, url: &str, credential: &str) -> Result<Bytes, ProbeError> {
        let request = self
            .client
            .get(url)
            .header(AUTHORIZATION, credential)
            .build()
            .map_err(ProbeError::BuildRequest)?;

        debug!("GET {}", request.url());
        let res = self.client.execute(request).await.map_err(ProbeError::Fetch)?;

        let status = res.status();
        if !status.is_success() {
            warn!("status endpoint answered {}, evaluating body anyway", status);
        }

        let body = res.bytes().await.map_err(ProbeError::ReadBody)?;
        debug!("read {} byte(s) from status endpoint", body.len());
        Ok(body)
    }
}
