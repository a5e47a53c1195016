use crate::search_state::{ResultsView, SUGGESTED_TOPICS};
use crate::ui::search_context::use_search;
use dioxus::prelude::*;

use super::article_card::ArticleCard;

/// Article search page: query box, results for the current page, and paging
#[component]
pub fn SearchPage() -> Element {
    let search = use_search();

    let (query, loading, view, visible, show_pagination) = {
        let state = search.state.read();
        let first_index = state.first_visible_index();
        let visible: Vec<_> = state
            .visible_articles()
            .iter()
            .cloned()
            .enumerate()
            .map(|(offset, article)| (first_index + offset, article))
            .collect();
        (
            state.query().to_string(),
            state.is_loading(),
            state.results_view(),
            visible,
            state.shows_pagination(),
        )
    };

    rsx! {
        div { class: "min-h-screen bg-gray-100 p-6",
            div { class: "max-w-3xl mx-auto bg-white p-6 rounded-lg shadow-lg",
                h1 { class: "text-3xl font-bold text-center text-gray-800 mb-6",
                    "Discover Articles"
                }

                div { class: "flex gap-2 mb-6",
                    div { class: "relative w-full",
                        input {
                            r#type: "text",
                            class: "w-full p-3 pl-10 border rounded-lg shadow-sm focus:outline-none focus:ring-2 focus:ring-blue-400",
                            placeholder: "Search for articles...",
                            value: "{query}",
                            onmounted: move |element| {
                                spawn(async move {
                                    let _ = element.set_focus(true).await;
                                });
                            },
                            oninput: {
                                let search = search.clone();
                                move |event: FormEvent| {
                                    search.set_query(event.value());
                                }
                            },
                            onkeydown: {
                                let search = search.clone();
                                move |event: KeyboardEvent| {
                                    if event.key() == Key::Enter {
                                        search.submit();
                                    }
                                }
                            },
                        }
                        span { class: "absolute left-3 top-3 text-gray-500 text-xl", "⌕" }
                    }
                    button {
                        class: "px-6 py-3 bg-blue-600 text-white font-semibold rounded-lg shadow-md hover:bg-blue-700 flex items-center disabled:opacity-50",
                        disabled: loading,
                        onclick: {
                            let search = search.clone();
                            move |_| search.submit()
                        },
                        if loading {
                            span { class: "animate-spin", "↻" }
                        } else {
                            "Search"
                        }
                    }
                }

                div { class: "space-y-4",
                    {match view {
                        ResultsView::Loading => rsx! {
                            p { class: "text-center text-gray-500 animate-pulse", "Loading articles..." }
                        },
                        ResultsView::Articles => rsx! {
                            for (index, article) in visible {
                                ArticleCard {
                                    key: "{index}",
                                    title: article.title,
                                    url: article.url,
                                    abstract_text: article.abstract_text,
                                }
                            }
                        },
                        ResultsView::NoResults => rsx! {
                            EmptyResults {}
                        },
                    }}
                }

                if show_pagination {
                    PaginationControls {}
                }
            }
        }
    }
}

/// Shown when there are no articles; offers topics to fill the query with
#[component]
fn EmptyResults() -> Element {
    let search = use_search();

    rsx! {
        div { class: "text-center text-gray-500",
            div { class: "mx-auto text-6xl mb-4", "🗎" }
            p { class: "mb-2", "No articles found. Try a different keyword!" }
            div {
                p { class: "font-semibold", "Suggested Topics:" }
                div { class: "flex justify-center space-x-2 mt-2",
                    for topic in SUGGESTED_TOPICS {
                        button {
                            key: "{topic}",
                            class: "bg-blue-100 text-blue-600 py-1 px-3 rounded-full text-sm hover:bg-blue-200",
                            onclick: {
                                let search = search.clone();
                                move |_| search.pick_suggestion(topic)
                            },
                            "{topic}"
                        }
                    }
                }
            }
        }
    }
}

/// Previous / "Page X of Y" / Next
#[component]
fn PaginationControls() -> Element {
    let search = use_search();

    let (page, total_pages, at_first, at_last) = {
        let state = search.state.read();
        (
            state.page(),
            state.total_pages(),
            state.is_first_page(),
            state.is_last_page(),
        )
    };

    let button_class = |disabled: bool| {
        let base = "px-4 py-2 bg-gray-300 text-gray-700 font-medium rounded-lg shadow-md hover:bg-gray-400";
        if disabled {
            format!("{} opacity-50 cursor-not-allowed", base)
        } else {
            base.to_string()
        }
    };
    let previous_class = button_class(at_first);
    let next_class = button_class(at_last);

    rsx! {
        div { class: "flex justify-between items-center mt-6",
            button {
                class: "{previous_class}",
                disabled: at_first,
                onclick: {
                    let search = search.clone();
                    move |_| search.previous_page()
                },
                "Previous"
            }
            p { class: "text-gray-700 font-medium", "Page {page} of {total_pages}" }
            button {
                class: "{next_class}",
                disabled: at_last,
                onclick: move |_| search.next_page(),
                "Next"
            }
        }
    }
}
