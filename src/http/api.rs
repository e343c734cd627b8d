//! Combinations endpoint
//!
//! `GET {base_url}{endpoint}?pageIndex={n}&pageSize={size}` returning
//! `{ "items": [...], "totalCount": n }`.

use super::client::{HttpClient, HttpClientConfig, Query};
use crate::config::FeedConfig;
use crate::error::Result;
use crate::feed::PageSource;
use crate::pagination::PageRequest;
use crate::types::CombinationPage;
use async_trait::async_trait;
use tracing::debug;

/// Query parameter carrying the 1-based page index
pub const PAGE_INDEX_PARAM: &str = "pageIndex";

/// Query parameter carrying the page size
pub const PAGE_SIZE_PARAM: &str = "pageSize";

/// Client for the combinations listing
#[derive(Debug, Clone)]
pub struct CombinationsApi {
    client: HttpClient,
    endpoint: String,
}

impl CombinationsApi {
    /// Create an API client from a feed config
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let http_config = HttpClientConfig::builder()
            .base_url(&config.base_url)
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .header("Accept", "application/json")
            .build();

        Ok(Self {
            client: HttpClient::with_config(http_config)?,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Full URL of the listing endpoint
    pub fn url(&self) -> String {
        self.client.build_url(&self.endpoint)
    }

    /// Fetch one page
    pub async fn get_page(&self, request: PageRequest) -> Result<CombinationPage> {
        let query = Query::new()
            .param(PAGE_INDEX_PARAM, request.page_index)
            .param(PAGE_SIZE_PARAM, request.page_size);

        debug!(
            page_index = request.page_index,
            page_size = request.page_size,
            "Fetching combinations page"
        );

        let page: CombinationPage = self
            .client
            .get_json(&self.endpoint, &query)
            .await?;

        debug!(
            page_index = request.page_index,
            items = page.items.len(),
            total_count = page.total_count,
            "Fetched combinations page"
        );

        Ok(page)
    }
}

#[async_trait]
impl PageSource for CombinationsApi {
    async fn fetch_page(&self, request: PageRequest) -> Result<CombinationPage> {
        self.get_page(request).await
    }
}
