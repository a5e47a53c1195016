use crate::models::Article;
use crate::nyt::client::SearchError;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Top-level article search response
#[derive(Debug, Deserialize)]
struct ArticleSearchResponse {
    response: ResponseBody,
}

/// Docs are kept as raw JSON so one bad entry doesn't sink the whole page
#[derive(Debug, Deserialize)]
struct ResponseBody {
    docs: Vec<Value>,
}

/// A single search hit
#[derive(Debug, Deserialize)]
struct Doc {
    headline: Option<Headline>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    web_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Headline {
    main: Option<String>,
}

/// Why an individual doc was left out of the results
#[derive(Error, Debug, PartialEq)]
enum DocError {
    #[error("unexpected field types: {0}")]
    Shape(String),
    #[error("missing headline")]
    MissingHeadline,
    #[error("missing web_url")]
    MissingUrl,
}

impl Doc {
    fn into_article(self) -> Result<Article, DocError> {
        let title = self
            .headline
            .and_then(|h| h.main)
            .filter(|t| !t.trim().is_empty())
            .ok_or(DocError::MissingHeadline)?;

        let url = self
            .web_url
            .filter(|u| !u.trim().is_empty())
            .ok_or(DocError::MissingUrl)?;

        Ok(Article::new(title, self.abstract_text, url))
    }
}

fn parse_doc(value: Value) -> Result<Article, DocError> {
    let doc: Doc = serde_json::from_value(value).map_err(|e| DocError::Shape(e.to_string()))?;
    doc.into_article()
}

/// Parse an article search body into articles, in response order.
///
/// The body must be JSON with a `response.docs` array; anything else is a
/// failed search. Individual docs that can't be turned into an [`Article`]
/// are dropped and logged.
pub fn parse_search_response(body: &str) -> Result<Vec<Article>, SearchError> {
    let parsed: ArticleSearchResponse = serde_json::from_str(body)?;
    let total = parsed.response.docs.len();

    let articles: Vec<Article> = parsed
        .response
        .docs
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match parse_doc(value) {
            Ok(article) => Some(article),
            Err(e) => {
                warn!("Skipping search result #{}: {}", index, e);
                None
            }
        })
        .collect();

    debug!("Parsed {} of {} search result(s)", articles.len(), total);
    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NO_DESCRIPTION;
    use serde_json::json;

    fn body(docs: Value) -> String {
        json!({ "status": "OK", "response": { "docs": docs } }).to_string()
    }

    #[test]
    fn test_maps_docs_in_order() {
        let body = body(json!([
            {
                "headline": { "main": "First" },
                "abstract": "One",
                "web_url": "https://www.nytimes.com/1"
            },
            {
                "headline": { "main": "Second", "kicker": null },
                "abstract": "Two",
                "web_url": "https://www.nytimes.com/2",
                "word_count": 900
            }
        ]));

        let articles = parse_search_response(&body).unwrap();
        assert_eq!(
            articles,
            vec![
                Article {
                    title: "First".to_string(),
                    abstract_text: "One".to_string(),
                    url: "https://www.nytimes.com/1".to_string(),
                },
                Article {
                    title: "Second".to_string(),
                    abstract_text: "Two".to_string(),
                    url: "https://www.nytimes.com/2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_absent_null_or_empty_abstract_uses_placeholder() {
        let body = body(json!([
            { "headline": { "main": "A" }, "web_url": "https://a" },
            { "headline": { "main": "B" }, "abstract": null, "web_url": "https://b" },
            { "headline": { "main": "C" }, "abstract": "", "web_url": "https://c" }
        ]));

        let articles = parse_search_response(&body).unwrap();
        assert_eq!(articles.len(), 3);
        assert!(articles.iter().all(|a| a.abstract_text == NO_DESCRIPTION));
    }

    #[test]
    fn test_malformed_docs_are_dropped() {
        let body = body(json!([
            { "abstract": "no headline", "web_url": "https://a" },
            { "headline": { "main": "No url" } },
            { "headline": { "main": "Bad url type" }, "web_url": 42 },
            { "headline": { "main": "   " }, "web_url": "https://blank-title" },
            "not even an object",
            { "headline": { "main": "Good" }, "web_url": "https://good" }
        ]));

        let articles = parse_search_response(&body).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Good");
    }

    #[test]
    fn test_url_is_passed_through_unchanged() {
        let body = body(json!([
            { "headline": { "main": "Odd" }, "web_url": "not a url at all" }
        ]));

        let articles = parse_search_response(&body).unwrap();
        assert_eq!(articles[0].url, "not a url at all");
    }

    #[test]
    fn test_empty_docs_is_an_empty_list() {
        let articles = parse_search_response(&body(json!([]))).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_non_json_body_is_a_decode_error() {
        let result = parse_search_response("<html>Service Unavailable</html>");
        assert!(matches!(result, Err(SearchError::Decode(_))));
    }

    #[test]
    fn test_missing_docs_is_a_decode_error() {
        let result = parse_search_response(r#"{"fault":{"faultstring":"Invalid ApiKey"}}"#);
        assert!(matches!(result, Err(SearchError::Decode(_))));

        let result = parse_search_response(r#"{"response":{}}"#);
        assert!(matches!(result, Err(SearchError::Decode(_))));
    }

    #[test]
    fn test_doc_errors() {
        assert_eq!(
            parse_doc(json!({ "web_url": "https://a" })),
            Err(DocError::MissingHeadline)
        );
        assert_eq!(
            parse_doc(json!({ "headline": { "main": "T" }, "web_url": "" })),
            Err(DocError::MissingUrl)
        );
        assert!(matches!(parse_doc(json!([1, 2])), Err(DocError::Shape(_))));
    }
}
