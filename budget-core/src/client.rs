//! Native HTTP transport for the report endpoint.

use crate::error::{ReportError, Result};
use crate::report::ReportResult;
use crate::request::{report_url, ReportRequest};
use crate::submit::ReportTransport;
use log::{debug, warn};
use reqwest::Client;

/// Posts report requests with `reqwest`. No retries and no timeout: a
/// request runs until the server answers or the connection fails.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: report_url(base_url),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReportTransport for HttpTransport {
    async fn fetch_report(&self, request: &ReportRequest) -> Result<ReportResult> {
        debug!("POST {}", self.url);
        // `.json()` sets Content-Type: application/json
        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Bad response status from {}: {}", self.url, status);
            return Err(ReportError::Api {
                status: status.as_u16(),
                body,
            });
        }
        ReportResult::from_json(&body)
    }
}
