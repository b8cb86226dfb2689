//! Reddit listing API HTTP client.

use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::{header, Client, Response};
use url::Url;

use crate::api::types::{Listing, ListingPage};
use crate::config::SortOrder;
use crate::error::{Error, Result};

/// Reddit API base URL.
const API_BASE: &str = "https://www.reddit.com";

/// Posts per listing page (fixed by the API).
pub const PAGE_SIZE: u64 = 25;

/// Length of the randomized user-agent string.
const USER_AGENT_LENGTH: usize = 10;

/// Client for the public (unauthenticated) listing endpoints.
pub struct RedditApi {
    client: Client,
    base_url: String,
}

impl RedditApi {
    /// Create a new API client against the public Reddit host.
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE)
    }

    /// Create a client against a different host. Used by tests to point at a
    /// local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fresh random user-agent string for one request.
    fn random_user_agent() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(USER_AGENT_LENGTH)
            .map(char::from)
            .collect()
    }

    /// Fetch one listing page.
    ///
    /// Errors here are fatal to the scrape: without a trustworthy cursor the
    /// remaining pages cannot be requested.
    pub async fn get_listing(
        &self,
        subreddit: &str,
        sort: SortOrder,
        after: Option<&str>,
    ) -> Result<ListingPage> {
        let mut url = Url::parse(&format!(
            "{}/r/{}/{}.json",
            self.base_url, subreddit, sort
        ))?;
        if let Some(cursor) = after {
            url.query_pairs_mut().append_pair("after", cursor);
        }

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(header::USER_AGENT, Self::random_user_agent())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::Api(format!(
                "Listing request failed: HTTP {} for {}",
                status, url
            )));
        }

        let text = response.text().await?;
        let listing: Listing = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse listing: {} - Response: {}",
                e,
                &text[..text.len().min(500)]
            ))
        })?;

        Ok(listing.into_page())
    }

    /// Download a file from a media URL.
    pub async fn download_file(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, Self::random_user_agent())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download file: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }
}
