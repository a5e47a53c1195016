use crate::models::Article;
use crate::nyt::SearchError;
use crate::pagination::{self, PAGE_SIZE};
use tracing::{debug, error, info};

/// Topics offered when there is nothing to show
pub const SUGGESTED_TOPICS: [&str; 5] = ["Technology", "Sports", "Health", "Business", "Travel"];

/// What the results area should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsView {
    Loading,
    Articles,
    NoResults,
}

/// All state owned by the search page
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    query: String,
    articles: Vec<Article>,
    loading: bool,
    page: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            articles: Vec::new(),
            loading: false,
            page: 1,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replace the query with the input field's current value
    pub fn set_query(&mut self, value: impl Into<String>) {
        self.query = value.into();
    }

    /// Fill the query from a suggested topic. Does not search.
    pub fn pick_suggestion(&mut self, topic: &str) {
        debug!("Picked suggested topic {}", topic);
        self.set_query(topic);
    }

    /// Start a search, returning the query to send.
    ///
    /// Returns `None` without touching state when the trimmed query is empty
    /// or a search is already in flight, so at most one request is ever
    /// outstanding.
    pub fn begin_search(&mut self) -> Option<String> {
        let query = self.query.trim();
        if query.is_empty() {
            debug!("Ignoring search with empty query");
            return None;
        }
        if self.loading {
            debug!("Ignoring search for {:?}: a search is already running", query);
            return None;
        }

        info!("🔍 Searching articles for {:?}", query);
        let query = query.to_string();
        self.loading = true;
        Some(query)
    }

    /// Apply the outcome of the search started by [`begin_search`](Self::begin_search).
    ///
    /// Failures are logged and otherwise ignored: the previous results stay
    /// on screen and no error is shown.
    pub fn finish_search(&mut self, outcome: Result<Vec<Article>, SearchError>) {
        match outcome {
            Ok(articles) => {
                info!("✓ Showing {} article(s)", articles.len());
                self.articles = articles;
                self.page = 1;
            }
            Err(e) => {
                error!("Error fetching articles: {}", e);
            }
        }
        self.loading = false;
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.articles.len())
    }

    pub fn next_page(&mut self) {
        self.page = pagination::next_page(self.page, self.total_pages());
    }

    pub fn previous_page(&mut self) {
        self.page = pagination::previous_page(self.page);
    }

    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages()
    }

    /// Articles on the current page, in response order
    pub fn visible_articles(&self) -> &[Article] {
        pagination::page_slice(&self.articles, self.page)
    }

    /// Previous/next controls only appear once results overflow one page
    pub fn shows_pagination(&self) -> bool {
        pagination::needs_pagination(self.articles.len())
    }

    pub fn results_view(&self) -> ResultsView {
        if self.loading {
            ResultsView::Loading
        } else if self.articles.is_empty() {
            ResultsView::NoResults
        } else {
            ResultsView::Articles
        }
    }

    /// Index of the first visible article within the full list
    pub fn first_visible_index(&self) -> usize {
        self.page.saturating_sub(1) * PAGE_SIZE
    }
}
