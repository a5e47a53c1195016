use dioxus::prelude::*;

/// One search result: linked title over its abstract
///
/// The link opens in a new window without giving the opened page a handle
/// back to this one. The URL is used as given.
#[component]
pub fn ArticleCard(title: String, url: String, abstract_text: String) -> Element {
    rsx! {
        div { class: "p-4 bg-white rounded shadow hover:shadow-md",
            h2 { class: "text-lg font-semibold",
                a {
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "text-blue-600 hover:underline",
                    "{title}"
                }
            }
            p { class: "text-gray-700", "{abstract_text}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(title: &str, url: &str, abstract_text: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            ArticleCard,
            ArticleCardProps {
                title: title.to_string(),
                url: url.to_string(),
                abstract_text: abstract_text.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_title_links_to_url_in_new_window() {
        let html = render(
            "Heat waves explained",
            "https://www.nytimes.com/heat",
            "Summer is getting longer",
        );

        assert!(html.contains(r#"href="https://www.nytimes.com/heat""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains("Heat waves explained"));
        assert!(html.contains("Summer is getting longer"));
    }

    #[test]
    fn test_title_comes_before_abstract() {
        let html = render("Title text", "https://a", "Abstract text");
        let title_at = html.find("Title text").unwrap();
        let abstract_at = html.find("Abstract text").unwrap();
        assert!(title_at < abstract_at);
    }

    #[test]
    fn test_invalid_url_is_passed_through() {
        let html = render("T", "not-a-url", "A");
        assert!(html.contains(r#"href="not-a-url""#));
    }
}
