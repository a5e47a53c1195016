use crate::config::use_config;
use crate::nyt::{ArticleSource, NytClient};
use crate::search_state::SearchState;
use dioxus::prelude::*;
use std::sync::Arc;

/// Search page state plus the source searches are sent to
///
/// Cloning is cheap: the state is a signal and the source is shared.
#[derive(Clone)]
pub struct SearchContext {
    pub state: Signal<SearchState>,
    source: Arc<dyn ArticleSource>,
}

impl SearchContext {
    pub fn new(state: Signal<SearchState>, source: Arc<dyn ArticleSource>) -> Self {
        Self { state, source }
    }

    pub fn set_query(&self, value: String) {
        let mut state = self.state;
        state.write().set_query(value);
    }

    pub fn pick_suggestion(&self, topic: &str) {
        let mut state = self.state;
        state.write().pick_suggestion(topic);
    }

    /// Submit the current query. No-op for a blank query or while a search is running.
    pub fn submit(&self) {
        let mut state = self.state;
        let Some(query) = state.write().begin_search() else {
            return;
        };

        let source = self.source.clone();
        spawn(async move {
            let outcome = source.search(&query).await;
            state.write().finish_search(outcome);
        });
    }

    pub fn next_page(&self) {
        let mut state = self.state;
        state.write().next_page();
    }

    pub fn previous_page(&self) {
        let mut state = self.state;
        state.write().previous_page();
    }
}

/// Provider component to make the search context available to the page
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let config = use_config();
    let state = use_signal(SearchState::new);

    use_context_provider(|| {
        let source: Arc<dyn ArticleSource> = Arc::new(NytClient::from_config(&config));
        SearchContext::new(state, source)
    });

    rsx! {
        {children}
    }
}

/// Hook to access the search context
pub fn use_search() -> SearchContext {
    use_context::<SearchContext>()
}
