use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The publisher an article comes from.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    /// The identifier of the source, absent for smaller publishers.
    pub id: Option<String>,

    /// The display name of the source.
    pub name: Option<String>,
}

impl Source {
    /// Creates a new `Source` instance.
    pub fn new(id: Option<&str>, name: Option<&str>) -> Self {
        Self {
            id: id.map(str::to_string),
            name: name.map(str::to_string),
        }
    }
}

/// A news article.
///
/// Every field is optional: the API routinely returns partial articles.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The author of the article.
    pub author: Option<String>,

    /// The truncated content of the article.
    pub content: Option<String>,

    /// A short description or snippet.
    pub description: Option<String>,

    /// The publication timestamp, as sent by the API (RFC 3339).
    pub published_at: Option<String>,

    /// The publisher of the article.
    pub source: Option<Source>,

    /// The headline of the article.
    pub title: Option<String>,

    /// The direct URL to the article.
    pub url: Option<String>,

    /// The URL to a relevant image for the article.
    pub url_to_image: Option<String>,
}

impl Article {
    /// Creates an article with only a title and a URL set.
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    /// Parses the publication timestamp, if present and well formed.
    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        self.published_at
            .as_deref()
            .and_then(|published_at| DateTime::parse_from_rfc3339(published_at).ok())
            .map(|published_at| published_at.with_timezone(&Utc))
    }
}

impl Display for Article {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_name = self
            .source
            .as_ref()
            .and_then(|source| source.name.as_deref())
            .unwrap_or("unknown source");
        write!(
            f,
            "{} ({source_name})",
            self.title.as_deref().unwrap_or("(untitled)")
        )?;
        if let Some(url) = &self.url {
            write!(f, " <{url}>")?;
        }

        Ok(())
    }
}

/// A response of the News API, either a page of articles or an error envelope.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    /// The articles, in the order returned by the API.
    #[serde(default)]
    pub articles: Vec<Article>,

    /// The status of the response, `ok` or `error`.
    #[serde(default)]
    pub status: String,

    /// The error code, set on error envelopes.
    pub code: Option<String>,

    /// The error message, set on error envelopes.
    pub message: Option<String>,

    /// The total number of results available for the request.
    #[serde(default)]
    pub total_results: u32,
}

impl NewsResponse {
    /// Creates a successful `NewsResponse` instance with the given articles.
    pub fn new(articles: Vec<Article>, total_results: u32) -> Self {
        Self {
            articles,
            status: "ok".to_string(),
            code: None,
            message: None,
            total_results,
        }
    }

    /// Whether the API reported the response as successful.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    #[cfg(test)]
    /// Creates a dummy `NewsResponse` instance for testing purposes.
    pub fn dummy() -> Self {
        Self::new(
            vec![
                Article::new("Headline 1", "https://example.com/1"),
                Article::new("Headline 2", "https://example.com/2"),
            ],
            2,
        )
    }
}

impl Display for NewsResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NewsResponse: status={}, articles={}, total_results={}",
            self.status,
            self.articles.len(),
            self.total_results
        )?;
        if let Some(message) = &self.message {
            write!(f, ", message={message}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    mod article {
        use super::*;

        #[test]
        fn deserializes_partial_article() {
            let article: Article = serde_json::from_value(json!({
                "source": { "id": null, "name": "Example" },
                "title": "Only a title",
                "publishedAt": "2024-05-01T10:00:00Z",
                "urlToImage": null
            }))
            .unwrap();

            assert_eq!(Some("Only a title".to_string()), article.title);
            assert_eq!(Some(Source::new(None, Some("Example"))), article.source);
            assert_eq!(None, article.author);
            assert_eq!(None, article.url_to_image);
        }

        #[test]
        fn parses_published_at() {
            let article = Article {
                published_at: Some("2024-05-01T10:00:00+02:00".to_string()),
                ..Default::default()
            };

            let published_at = article.published_at_utc().unwrap();

            assert_eq!("2024-05-01T08:00:00+00:00", published_at.to_rfc3339());
        }

        #[test]
        fn ignores_malformed_published_at() {
            let article = Article {
                published_at: Some("yesterday".to_string()),
                ..Default::default()
            };

            assert!(article.published_at_utc().is_none());
        }
    }

    mod news_response {
        use super::*;

        #[test]
        fn deserializes_articles_page() {
            let response: NewsResponse = serde_json::from_value(json!({
                "status": "ok",
                "totalResults": 1,
                "articles": [{ "title": "A1", "url": "https://example.com/a1" }]
            }))
            .unwrap();

            assert!(response.is_ok());
            assert_eq!(
                NewsResponse::new(vec![Article::new("A1", "https://example.com/a1")], 1),
                response
            );
        }

        #[test]
        fn deserializes_error_envelope() {
            let response: NewsResponse = serde_json::from_value(json!({
                "status": "error",
                "code": "apiKeyInvalid",
                "message": "Your API key is invalid or incorrect."
            }))
            .unwrap();

            assert!(!response.is_ok());
            assert!(response.articles.is_empty());
            assert_eq!(0, response.total_results);
            assert_eq!(Some("apiKeyInvalid".to_string()), response.code);
        }
    }
}
