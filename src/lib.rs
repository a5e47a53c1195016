// Library exports for the desktop binary and integration tests

pub mod config;
pub mod models;
pub mod nyt;
pub mod pagination;
pub mod search_state;
pub mod ui;

pub use config::Config;
pub use models::Article;
pub use search_state::SearchState;

// Test support (unit tests, or integration tests with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
