// Application state module
// Shared, read-only state handed to every connection

use std::net::SocketAddr;
use std::sync::atomic::AtomicBool;

use super::types::Config;
use crate::novel::Catalog;

/// Application state
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    /// Absolute origin for sitemap and robots links
    pub base_url: String,

    // Cached config values for fast access without locks
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Build the chapter catalog once and wrap it with the configuration
    pub fn new(config: &Config) -> Self {
        Self {
            catalog: Catalog::from_config(&config.novel),
            base_url: config.base_url(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
            config: config.clone(),
        }
    }

    /// Build state for a bound listener
    ///
    /// `server.port` is replaced with the port actually bound, so a
    /// configured port 0 still yields a reachable default base URL.
    pub fn for_listener(config: &Config, local_addr: SocketAddr) -> Self {
        let mut config = config.clone();
        config.server.port = local_addr.port();
        Self::new(&config)
    }

    pub fn page_size(&self) -> usize {
        self.config.novel.effective_page_size()
    }
}
