use std::fmt::Display;

use serde::Serialize;

/// The country top headlines are fetched for when none is given.
pub const DEFAULT_COUNTRY: &str = "us";

/// The order in which searched articles are returned.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Articles more closely related to the query come first.
    Relevancy,

    /// Articles from popular sources and publishers come first.
    #[default]
    Popularity,

    /// Newest articles come first.
    PublishedAt,
}

impl SortBy {
    /// The value sent in the `sortBy` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevancy => "relevancy",
            SortBy::Popularity => "popularity",
            SortBy::PublishedAt => "publishedAt",
        }
    }
}

impl Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
