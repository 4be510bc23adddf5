//! HTTP collaborator used to fetch result pages.
//!
//! Uses reqwest behind the [`HttpClient`] trait so the pipeline can run
//! against a stub in tests.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// User-Agent string identifying this scraper
pub const USER_AGENT: &str = concat!("serp-carousel/", env!("CARGO_PKG_VERSION"));

/// Default timeout for HTTP requests
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Status line and body of a fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    /// Reason phrase, e.g. "Not Found". [`ReqwestClient`] fills in the
    /// canonical phrase for the status code, not the phrase the server sent.
    pub status_message: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            status_message: "OK".to_string(),
            body: body.into(),
        }
    }
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a single GET request. Non-2xx statuses are not errors here.
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}

/// [`HttpClient`] backed by a configured reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_options(USER_AGENT, REQUEST_TIMEOUT)
    }

    pub fn with_options(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        tracing::debug!(url, "sending request");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(HttpResponse {
            status_code: status.as_u16(),
            status_message: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_response_is_200() {
        let response = HttpResponse::ok("<html></html>");
        assert_eq!(response.status_code, 200);
        assert_eq!(response.status_message, "OK");
        assert_eq!(response.body, "<html></html>");
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn fetches_a_live_page() {
        let client = ReqwestClient::new().unwrap();
        let response = client.get("https://www.google.com/search?q=rust").await.unwrap();
        assert_eq!(response.status_code, 200);
        assert!(!response.body.is_empty());
    }
}
