use crate::{ApiResponse, NewsResponse, SortBy, TransportResult};

/// A trait for retrieving news from a remote source.
///
/// Unsuccessful statuses are returned as data; only transport faults are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait NewsDataSource: Sync + Send {
    /// Fetches the top headlines of a country.
    async fn fetch_headlines(&self, country: &str) -> TransportResult<ApiResponse<NewsResponse>>;

    /// Searches articles whose title matches the query.
    async fn search_articles(
        &self,
        query: &str,
        sort_by: SortBy,
    ) -> TransportResult<ApiResponse<NewsResponse>>;
}
