use reqwest::{Client, ClientBuilder, StatusCode};
use url::Url;

use crate::config::FetchConfig;
use crate::error::{AccError, Result};

/// HTTP client for retrieving documents to analyze.
///
/// Performs one GET per call with the configured timeout and user agent.
/// There are no retries.
#[derive(Debug, Clone)]
pub struct DocumentFetcher {
    http: Client,
}

impl DocumentFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let http = client_builder(config).build().map_err(AccError::Network)?;
        Ok(Self { http })
    }

    pub async fn fetch(&self, url: &Url) -> Result<String> {
        log::debug!("fetching {}", url);
        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            log::warn!("request to {} failed: {}", url, e);
            AccError::Network(e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("{} responded with {}", url, status);
            return Err(AccError::HttpStatus { status });
        }

        response.text().await.map_err(|e| {
            log::warn!("reading body from {} failed: {}", url, e);
            AccError::Network(e)
        })
    }
}

fn client_builder(config: &FetchConfig) -> ClientBuilder {
    Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
}

/// Retrieve `url` with a one-off client built from `config`.
pub async fn fetch_document(url: &Url, config: &FetchConfig) -> Result<String> {
    DocumentFetcher::new(config)?.fetch(url).await
}
