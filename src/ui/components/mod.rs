pub mod article_card;
pub mod search_page;

pub use article_card::ArticleCard;
pub use search_page::SearchPage;
