use dioxus::prelude::*;
use tracing::{info, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://api.nytimes.com";

/// Application configuration
/// In debug builds: loads .env first, then reads the process environment
/// In release builds: reads the process environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Key sent as the `api-key` parameter on every search
    pub nyt_api_key: String,
    /// Scheme and host of the article search API
    pub api_base_url: String,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using process environment");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    fn from_env() -> Self {
        Self::from_vars(
            std::env::var("NYT_API_KEY").ok(),
            std::env::var("NYT_API_BASE_URL").ok(),
        )
    }

    fn from_vars(api_key: Option<String>, base_url: Option<String>) -> Self {
        // A missing key is not fatal: the upstream rejects the request and the
        // search fails through the usual path.
        let nyt_api_key = api_key.unwrap_or_default();
        if nyt_api_key.is_empty() {
            warn!("Config: NYT_API_KEY is not set, searches will be rejected upstream");
        }

        let api_base_url = base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        info!("Config: Article search API at {}", api_base_url);

        Self {
            nyt_api_key,
            api_base_url,
        }
    }
}

/// Hook to read the configuration provided at launch
pub fn use_config() -> Config {
    use_context::<Config>()
}
