use std::sync::Arc;

use log::debug;

use crate::{ApiResponse, NewsApiClient, NewsDataSource, NewsResponse, SortBy, TransportResult};

/// A data source backed by the News API HTTP client.
pub struct RemoteNewsDataSource {
    client: Arc<NewsApiClient>,
}

impl RemoteNewsDataSource {
    /// Creates a new `RemoteNewsDataSource` instance with the given client.
    pub fn new(client: Arc<NewsApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl NewsDataSource for RemoteNewsDataSource {
    async fn fetch_headlines(&self, country: &str) -> TransportResult<ApiResponse<NewsResponse>> {
        debug!("Fetching top headlines: country={country}");
        self.client.fetch_headlines(country).await
    }

    async fn search_articles(
        &self,
        query: &str,
        sort_by: SortBy,
    ) -> TransportResult<ApiResponse<NewsResponse>> {
        debug!("Searching articles: query={query}, sort_by={sort_by}");
        self.client.search_articles(query, sort_by).await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use serde_json::json;

    use super::*;

    fn setup_data_source(server: &MockServer) -> RemoteNewsDataSource {
        RemoteNewsDataSource::new(Arc::new(
            NewsApiClient::try_new(&server.base_url(), "credentials").unwrap(),
        ))
    }

    #[tokio::test]
    async fn forwards_headlines_parameters_unchanged() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/v2/top-headlines")
                    .query_param("country", "de")
                    .query_param("apiKey", "credentials");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({ "status": "ok", "totalResults": 0, "articles": [] }));
            })
            .await;
        let data_source = setup_data_source(&server);

        let response = data_source.fetch_headlines("de").await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            ApiResponse::new(200, Some(NewsResponse::new(vec![], 0))),
            response
        );
    }

    #[tokio::test]
    async fn forwards_search_parameters_unchanged() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/v2/everything")
                    .query_param("qInTitle", "rust lang")
                    .query_param("sortBy", "publishedAt");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!({ "status": "ok", "totalResults": 0, "articles": [] }));
            })
            .await;
        let data_source = setup_data_source(&server);

        data_source
            .search_articles("rust lang", SortBy::PublishedAt)
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn returns_failed_status_as_data() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("GET").path("/v2/top-headlines");
                then.status(429);
            })
            .await;
        let data_source = setup_data_source(&server);

        let response = data_source.fetch_headlines("us").await.unwrap();

        assert!(!response.is_successful());
        assert_eq!(429, response.status());
        assert!(response.body().is_none());
    }
}
