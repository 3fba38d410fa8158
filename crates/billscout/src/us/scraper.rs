use super::parser::{
    ParseError, parse_browse_results, parse_browse_results_lossy, parse_search_facets,
};
use super::query::BillSearch;
use super::types::{BillRow, SearchFacets};

use reqwest::Client;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Request timed out after {limit:?}: {url}")]
    Timeout { url: String, limit: Duration },
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
    timeout: Duration,
}

impl WebScraper {
    pub fn new() -> Result<Self, ScraperError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Fetch one browse page and extract its result rows, skipping
    /// malformed rows with a warning.
    pub async fn browse(&self, query: &BillSearch) -> Result<Vec<BillRow>, ScraperError> {
        let url = query.build();
        log::info!("Fetching bill browse results: {}", url);
        let html = self.get_html(&url).await?;
        Ok(parse_browse_results_lossy(&html))
    }

    /// Like [`browse`](Self::browse), but the first malformed row fails
    /// the whole batch.
    pub async fn browse_strict(&self, query: &BillSearch) -> Result<Vec<BillRow>, ScraperError> {
        let url = query.build();
        log::info!("Fetching bill browse results: {}", url);
        let html = self.get_html(&url).await?;
        Ok(parse_browse_results(&html)?)
    }

    /// Fetch the browse form page and harvest its filter option lists.
    pub async fn fetch_facets(&self) -> Result<SearchFacets, ScraperError> {
        let url = super::BASE_URL;
        log::info!("Fetching search facets: {}", url);
        let html = self.get_html(url).await?;
        Ok(parse_search_facets(&html)?)
    }

    async fn get_html(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        response
            .error_for_status()?
            .text()
            .await
            .map_err(|e| self.classify(url, e))
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> ScraperError {
        if err.is_timeout() {
            log::error!("Timed out fetching {}", url);
            ScraperError::Timeout {
                url: url.to_string(),
                limit: self.timeout,
            }
        } else {
            log::error!("HTTP error: {err:?}");
            ScraperError::Http(err)
        }
    }
}
