//! Client for the spreadsheet-backed Apps Script intake endpoint
//!
//! The collaborator appends one row per submission and stores the attached
//! archive in Drive. It answers POST with a `{success, ...}` JSON body; we
//! only require a successful HTTP status, since a storage failure on the
//! collaborator side is reported inside the sheet row itself.

use super::{ServiceError, SubmitService};
use crate::state::FormData;
use async_trait::async_trait;

/// Deployed web-app URL of the intake script
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbyN3u6HXIZ2sK0iR2UiHBdTlrx1EVV3AsRm9Te1F9eOIkdfsUsaewpO3R25tG3TBOg/exec";

/// Client posting registrations to the intake endpoint
pub struct AppsScriptClient {
    http: reqwest::Client,
    url: String,
}

impl AppsScriptClient {
    pub fn new(http: reqwest::Client, url: Option<String>) -> Self {
        Self {
            http,
            url: url.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }
}

#[async_trait]
impl SubmitService for AppsScriptClient {
    async fn submit(&self, data: &FormData) -> Result<(), ServiceError> {
        tracing::info!(business = %data.business_name, "submitting registration");
        let response = self.http.post(&self.url).json(data).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_is_https() {
        let client = AppsScriptClient::new(reqwest::Client::new(), None);
        assert!(client.url.starts_with("https://script.google.com/"));
    }

    #[test]
    fn configured_url_wins() {
        let client = AppsScriptClient::new(
            reqwest::Client::new(),
            Some("https://example.com/exec".to_string()),
        );
        assert_eq!(client.url, "https://example.com/exec");
    }
}
