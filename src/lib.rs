pub mod api;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod scraper;

use config::Config;
use fetcher::Fetcher;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Fetcher,
}

impl AppState {
    pub fn new(config: &Config) -> error::Result<Self> {
        Ok(AppState {
            fetcher: Fetcher::new(config.fetch_timeout)?,
        })
    }
}
