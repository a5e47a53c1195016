pub mod client;
pub mod models;

pub use client::{ArticleSource, NytClient, SearchError};
pub use models::parse_search_response;
