use crate::config::Config;
use crate::models::Article;
use crate::nyt::models::parse_search_response;
use async_trait::async_trait;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

pub const SEARCH_PATH: &str = "/svc/search/v2/articlesearch.json";

/// A failed article search
///
/// The variants only add detail for the log; callers treat them all alike.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Request(ReqwestError),
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// The request URL carries the API key, so it never goes into the error
impl From<ReqwestError> for SearchError {
    fn from(e: ReqwestError) -> Self {
        SearchError::Request(e.without_url())
    }
}

/// Anything that can answer a search query with articles
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Article>, SearchError>;
}

#[derive(Clone)]
pub struct NytClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NytClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, crate::config::DEFAULT_API_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(config.nyt_api_key.clone(), config.api_base_url.clone())
    }

    /// Search articles matching `query`
    pub async fn search_articles(&self, query: &str) -> Result<Vec<Article>, SearchError> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);

        info!("📡 Article search: GET {} with q={:?}", url, query);

        // reqwest percent-encodes query parameters
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("api-key", self.api_key.as_str())])
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            let body = response.text().await?;
            let articles = parse_search_response(&body)?;
            info!("✓ Article search returned {} result(s)", articles.len());
            Ok(articles)
        } else if status == StatusCode::UNAUTHORIZED {
            warn!("✗ Article search rejected the API key");
            Err(SearchError::InvalidApiKey)
        } else {
            warn!("✗ Article search API error: {}", status);
            Err(SearchError::Status(status))
        }
    }
}

#[async_trait]
impl ArticleSource for NytClient {
    async fn search(&self, query: &str) -> Result<Vec<Article>, SearchError> {
        self.search_articles(query).await
    }
}
