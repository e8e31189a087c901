use std::time::Duration;

use anyhow::Context;
use log::debug;
use reqwest::Client;
use serde::Serialize;

use crate::{ApiResponse, NewsResponse, SortBy, StdResult, TransportResult};

/// The production endpoint of the News API.
pub const NEWS_API_BASE_URL: &str = "https://newsapi.org";

/// The read timeout applied to every News API call.
pub const NEWS_API_READ_TIMEOUT: Duration = Duration::from_secs(60);

const TOP_HEADLINES_PATH: &str = "/v2/top-headlines";

const EVERYTHING_PATH: &str = "/v2/everything";

/// Query parameters of the top headlines endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TopHeadlinesQuery<'a> {
    country: &'a str,
    api_key: &'a str,
}

/// Query parameters of the everything endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EverythingQuery<'a> {
    sort_by: SortBy,
    api_key: &'a str,
    q_in_title: &'a str,
}

/// An HTTP client of the News API.
///
/// Each call issues exactly one GET request and never retries.
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    /// Creates a new `NewsApiClient` instance with the default read timeout.
    pub fn try_new(base_url: &str, api_key: &str) -> StdResult<Self> {
        Self::try_new_with_read_timeout(base_url, api_key, NEWS_API_READ_TIMEOUT)
    }

    /// Creates a new `NewsApiClient` instance with the given read timeout.
    pub fn try_new_with_read_timeout(
        base_url: &str,
        api_key: &str,
        read_timeout: Duration,
    ) -> StdResult<Self> {
        let client = Client::builder()
            .read_timeout(read_timeout)
            .build()
            .with_context(|| "Failed to build the News API HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetches the top headlines of a country.
    pub async fn fetch_headlines(
        &self,
        country: &str,
    ) -> TransportResult<ApiResponse<NewsResponse>> {
        let query = TopHeadlinesQuery {
            country,
            api_key: &self.api_key,
        };

        self.get(TOP_HEADLINES_PATH, &query).await
    }

    /// Searches articles whose title matches the query.
    pub async fn search_articles(
        &self,
        query: &str,
        sort_by: SortBy,
    ) -> TransportResult<ApiResponse<NewsResponse>> {
        let query = EverythingQuery {
            sort_by,
            api_key: &self.api_key,
            q_in_title: query,
        };

        self.get(EVERYTHING_PATH, &query).await
    }

    async fn get<Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> TransportResult<ApiResponse<NewsResponse>> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!("GET {url} answered {status} with {} bytes", bytes.len());
        let body = decode_body(status.is_success(), &bytes)?;

        Ok(ApiResponse::new(status.as_u16(), body))
    }
}

/// Decodes a response body.
///
/// Successful bodies must decode; failed ones are kept only when they do.
/// A blank body or a JSON `null` is an absent body.
fn decode_body(is_success: bool, bytes: &[u8]) -> TransportResult<Option<NewsResponse>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    if is_success {
        Ok(serde_json::from_slice::<Option<NewsResponse>>(bytes)?)
    } else {
        Ok(serde_json::from_slice::<Option<NewsResponse>>(bytes).ok().flatten())
    }
}
