/// Shown in place of an abstract the upstream source left out
pub const NO_DESCRIPTION: &str = "No description available.";

/// A single search result as shown on an article card
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub abstract_text: String,
    pub url: String,
}

impl Article {
    /// Build an article, substituting the placeholder for a blank or absent abstract
    pub fn new(title: String, abstract_text: Option<String>, url: String) -> Self {
        let abstract_text = abstract_text
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        Self {
            title,
            abstract_text,
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_abstract_uses_placeholder() {
        let article = Article::new("Title".to_string(), None, "https://x".to_string());
        assert_eq!(article.abstract_text, NO_DESCRIPTION);

        let blank = Article::new("Title".to_string(), Some("  ".to_string()), "u".to_string());
        assert_eq!(blank.abstract_text, NO_DESCRIPTION);
    }

    #[test]
    fn test_present_abstract_is_kept() {
        let article = Article::new(
            "Title".to_string(),
            Some("Summary".to_string()),
            "https://x".to_string(),
        );
        assert_eq!(article.abstract_text, "Summary");
    }
}
