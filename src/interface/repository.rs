use futures::stream::BoxStream;

use crate::{NewsResponse, ResultState};

/// The sequence of states emitted for one news request.
pub type NewsStateStream = BoxStream<'static, ResultState<NewsResponse>>;

/// A trait for observing news requests as a sequence of lifecycle states.
///
/// Each returned stream is lazy: nothing is requested until it is polled, and
/// it yields exactly `Loading` followed by one terminal state.
pub trait NewsRepository: Sync + Send {
    /// Streams the top headlines of a country.
    fn get_headlines(&self, country: &str) -> NewsStateStream;

    /// Streams the articles matching a search query.
    fn search_articles(&self, query: &str) -> NewsStateStream;
}
