//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use inkpost_core::lifecycle::DEFAULT_EDITOR_TARGET;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the remote post store. `None` selects the in-memory store.
    pub store_url: Option<String>,
    /// Per-request timeout for the remote store.
    pub store_timeout: Duration,
    /// Element the editor attaches to.
    pub editor_target: String,
    /// Seed the in-memory store with a welcome post.
    pub seed_demo: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            store_url: env::var("BLOG_STORE_URL").ok().filter(|s| !s.is_empty()),
            store_timeout: Duration::from_secs(
                env::var("BLOG_STORE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
            editor_target: env::var("BLOG_EDITOR_TARGET")
                .unwrap_or_else(|_| DEFAULT_EDITOR_TARGET.to_string()),
            seed_demo: env::var("BLOG_SEED_DEMO")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
