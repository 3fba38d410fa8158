use super::parser::{ParseError, parse_search_results, parse_search_results_lossy};
use super::query::BillSearch;
use super::types::BillCard;

use futures::StreamExt;
use futures::stream::FuturesUnordered;
use reqwest::Client;
use std::ops::RangeInclusive;
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

    /// Fetch one results page and extract its bill cards, skipping
    /// malformed cards with a warning.
    pub async fn search(&self, query: &BillSearch) -> Result<Vec<BillCard>, ScraperError> {
        let url = query.build();
        log::info!("Fetching bill search results: {}", url);
        let html = self.get_html(&url).await?;
        Ok(parse_search_results_lossy(&html))
    }

    /// Like [`search`](Self::search), but the first malformed card fails
    /// the whole batch.
    pub async fn search_strict(&self, query: &BillSearch) -> Result<Vec<BillCard>, ScraperError> {
        let url = query.build();
        log::info!("Fetching bill search results: {}", url);
        let html = self.get_html(&url).await?;
        Ok(parse_search_results(&html)?)
    }

    /// Fetch a range of results pages concurrently. A failed page is
    /// logged and skipped; card order across pages is not guaranteed.
    pub async fn search_pages(
        &self,
        query: &BillSearch,
        pages: RangeInclusive<u32>,
    ) -> Result<Vec<BillCard>, ScraperError> {
        let mut futures: FuturesUnordered<_> = pages
            .map(|page| {
                let paged = query.clone().page(page);
                async move { (page, self.search(&paged).await) }
            })
            .collect();

        let mut all = Vec::new();
        while let Some((page, result)) = futures.next().await {
            match result {
                Ok(cards) => all.extend(cards),
                Err(e) => log::warn!("Failed to fetch results page {}: {}", page, e),
            }
        }
        Ok(all)
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
