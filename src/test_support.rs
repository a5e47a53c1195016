// Test support utilities for both unit and integration tests

use crate::models::Article;
use crate::nyt::{parse_search_response, ArticleSource, SearchError};
use crate::search_state::SearchState;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory article source for testing
///
/// Answers every query by parsing a canned response body, exactly as the
/// real client would after a successful request. Records the queries it saw.
pub struct MockArticleSource {
    body: String,
    queries: Mutex<Vec<String>>,
}

impl MockArticleSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// A source whose response lists `docs` under `response.docs`
    pub fn with_docs(docs: serde_json::Value) -> Self {
        Self::new(serde_json::json!({ "status": "OK", "response": { "docs": docs } }).to_string())
    }

    /// Queries received so far, oldest first
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleSource for MockArticleSource {
    async fn search(&self, query: &str) -> Result<Vec<Article>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        parse_search_response(&self.body)
    }
}

/// Drive one submit through `state` the same way the search page does
pub async fn submit_and_wait(state: &mut SearchState, source: &dyn ArticleSource) {
    if let Some(query) = state.begin_search() {
        let outcome = source.search(&query).await;
        state.finish_search(outcome);
    }
}
