//! Page fetching capability used by the crawl backend

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use tracing::debug;

use crate::config::HttpConfig;
use crate::version::error::FetchError;
use crate::version::types::Credentials;

/// Raw response of a single page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Trait for fetching directory pages
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, locator: &str, credentials: &Credentials)
    -> Result<FetchedPage, FetchError>;
}

/// Build the HTTP client shared by backends and downloads
pub fn build_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_millis(config.timeout_ms))
        .build()
}

/// reqwest-backed page fetcher
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(
        &self,
        locator: &str,
        credentials: &Credentials,
    ) -> Result<FetchedPage, FetchError> {
        debug!("Fetching page: {}", locator);

        let response = credentials
            .apply(self.client.get(locator))
            .send()
            .await
            .map_err(|e| classify(locator, e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| classify(locator, e))?;

        Ok(FetchedPage { status, body })
    }
}

fn classify(locator: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(locator.to_string())
    } else {
        FetchError::Network(error)
    }
}
