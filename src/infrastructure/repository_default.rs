use std::{future::Future, sync::Arc};

use futures::{StreamExt, future, stream};
use log::{debug, info, warn};

use crate::{
    ApiResponse, NewsDataSource, NewsRepository, NewsResponse, NewsStateStream, ResultState,
    SortBy, TransportResult,
};

/// A repository that turns every data source call into a `Loading` then terminal state sequence.
pub struct DefaultNewsRepository {
    data_source: Arc<dyn NewsDataSource>,
}

impl DefaultNewsRepository {
    /// Creates a new `DefaultNewsRepository` instance with the given data source.
    pub fn new(data_source: Arc<dyn NewsDataSource>) -> Self {
        Self { data_source }
    }

    /// Builds the two-state sequence around a pending data source call.
    ///
    /// The call is only started once the consumer polls past `Loading`, and is
    /// dropped along with the stream.
    fn emit_states<F>(description: String, call: F) -> NewsStateStream
    where
        F: Future<Output = TransportResult<ApiResponse<NewsResponse>>> + Send + 'static,
    {
        let terminal = async move {
            debug!("Processing request: {description}");
            classify(&description, call.await)
        };

        stream::once(future::ready(ResultState::Loading))
            .chain(stream::once(terminal))
            .boxed()
    }
}

/// Maps the outcome of a data source call to a terminal state.
fn classify(
    description: &str,
    outcome: TransportResult<ApiResponse<NewsResponse>>,
) -> ResultState<NewsResponse> {
    match outcome {
        Ok(response) => {
            let status = response.status();
            let is_successful = response.is_successful();
            match (is_successful, response.into_body()) {
                (true, Some(body)) => {
                    info!("Request succeeded: {description}, {body}");
                    ResultState::success(body)
                }
                (_, body) => {
                    warn!(
                        "Request failed with status {status}: {description}, body present: {}",
                        body.is_some()
                    );
                    ResultState::failure(body)
                }
            }
        }
        Err(e) => {
            warn!("Request raised a fault: {description}, {e}");
            ResultState::fault(e)
        }
    }
}

impl NewsRepository for DefaultNewsRepository {
    fn get_headlines(&self, country: &str) -> NewsStateStream {
        let data_source = Arc::clone(&self.data_source);
        let country = country.to_string();

        Self::emit_states(
            format!("top headlines for country={country}"),
            async move { data_source.fetch_headlines(&country).await },
        )
    }

    fn search_articles(&self, query: &str) -> NewsStateStream {
        let data_source = Arc::clone(&self.data_source);
        let query = query.to_string();

        Self::emit_states(
            format!("search for query={query}"),
            async move {
                data_source
                    .search_articles(&query, SortBy::default())
                    .await
            },
        )
    }
}
