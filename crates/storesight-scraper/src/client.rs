//! HTTP client for storefront pages and the public `products.json` feed.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::types::ShopifyProductsResponse;

/// Default timeout for HTML page fetches, in seconds.
pub const PAGE_TIMEOUT_SECS: u64 = 10;

/// Default timeout for product feed fetches, in seconds. The feed response
/// is larger than a typical page, so it gets a longer budget.
pub const FEED_TIMEOUT_SECS: u64 = 15;

/// Fixed browser-like identity sent with every request. Some storefronts
/// filter requests that carry no recognizable browser UA.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP client shared by every fetch in one extraction run.
///
/// Page fetches are soft-failing: any network error or non-success status
/// collapses to `None` and the caller's fallback logic absorbs it. The feed
/// fetch returns typed errors so the catalog step can log what went wrong
/// before degrading to an empty catalog. No request is ever retried — a
/// transient failure is indistinguishable from a permanent one here.
pub struct InsightsClient {
    client: Client,
    page_timeout: Duration,
    feed_timeout: Duration,
}

impl InsightsClient {
    /// Creates a client with the default timeouts and the fixed browser UA.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new() -> Result<Self, ScraperError> {
        Self::with_timeouts(PAGE_TIMEOUT_SECS, FEED_TIMEOUT_SECS)
    }

    /// Creates a client with explicit page and feed timeouts, in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_timeouts(
        page_timeout_secs: u64,
        feed_timeout_secs: u64,
    ) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(BROWSER_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            page_timeout: Duration::from_secs(page_timeout_secs),
            feed_timeout: Duration::from_secs(feed_timeout_secs),
        })
    }

    /// Fetches an HTML page, collapsing every failure to `None`.
    ///
    /// Network errors, timeouts, non-2xx statuses, and unreadable bodies are
    /// all treated as "page unavailable"; the distinction does not matter to
    /// any caller and none of them is retried.
    pub async fn fetch_page(&self, url: &str) -> Option<String> {
        let response = self
            .client
            .get(url)
            .timeout(self.page_timeout)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await
            .ok()?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "page fetch returned non-success status");
            return None;
        }

        response.text().await.ok()
    }

    /// Fetches one page of the store's product feed as a typed response.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidStoreUrl`] — the store URL yields no usable origin.
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx status.
    /// - [`ScraperError::Http`] — network or TLS failure.
    /// - [`ScraperError::Deserialize`] — response body is not a valid feed.
    pub(crate) async fn fetch_products_json(
        &self,
        store_url: &str,
        limit: u32,
    ) -> Result<ShopifyProductsResponse, ScraperError> {
        let url = Self::products_url(store_url, limit)?;

        let response = self
            .client
            .get(&url)
            .timeout(self.feed_timeout)
            .header(
                reqwest::header::ACCEPT,
                "application/json,text/html;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<ShopifyProductsResponse>(&body).map_err(|e| {
            ScraperError::Deserialize {
                context: format!("product feed from {store_url}"),
                source: e,
            }
        })
    }

    /// Builds the `products.json` URL for the given store and page size.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidStoreUrl`] if the extracted origin
    /// cannot be parsed as a valid URL base.
    fn products_url(store_url: &str, limit: u32) -> Result<String, ScraperError> {
        let origin = extract_store_origin(store_url);
        let base = format!("{origin}/products.json");
        let mut url = reqwest::Url::parse(&base).map_err(|e| ScraperError::InvalidStoreUrl {
            store_url: store_url.to_owned(),
            reason: format!("origin \"{origin}\" is not a valid URL base: {e}"),
        })?;

        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        Ok(url.to_string())
    }
}

/// Extracts the scheme+host origin from a store URL.
///
/// Given `"https://acme.example/collections/all"`, returns
/// `"https://acme.example"`. This ensures the homepage and the feed are
/// always fetched from the store root, and gives every relative link a
/// stable resolution base.
#[must_use]
pub fn extract_store_origin(store_url: &str) -> String {
    reqwest::Url::parse(store_url).map_or_else(
        |e| {
            tracing::warn!(
                store_url,
                error = %e,
                "could not parse store URL — falling back to string split for origin extraction"
            );
            // fallback: take "https://host" by splitting on '/' and taking first 3 parts
            store_url
                .trim_end_matches('/')
                .splitn(4, '/')
                .take(3)
                .collect::<Vec<_>>()
                .join("/")
        },
        |u| u.origin().ascii_serialization(),
    )
}
