//! Application state - the adapters the controller is wired with.

use std::sync::Arc;

use chrono::Utc;
use inkpost_core::domain::Post;
use inkpost_core::ports::PostStore;
use inkpost_infra::{InMemoryPostStore, MarkupEditor};

#[cfg(feature = "http")]
use inkpost_infra::{HttpPostStore, HttpStoreConfig};

use crate::config::AppConfig;

/// Adapters shared by the controller and the command session.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub editor: Arc<MarkupEditor>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> Self {
        let editor = Arc::new(MarkupEditor::new());

        #[cfg(feature = "http")]
        let store: Arc<dyn PostStore> = match &config.store_url {
            Some(url) => {
                let store_config = http_store_config(url, config);
                match HttpPostStore::new(&store_config) {
                    Ok(store) => Arc::new(store),
                    Err(e) => {
                        tracing::error!(
                            "Failed to build remote store client: {}. Using in-memory fallback.",
                            e
                        );
                        in_memory_store(config.seed_demo)
                    }
                }
            }
            None => {
                tracing::warn!("BLOG_STORE_URL not set. Running with an in-memory store.");
                in_memory_store(config.seed_demo)
            }
        };

        #[cfg(not(feature = "http"))]
        let store: Arc<dyn PostStore> = {
            if config.store_url.is_some() {
                tracing::warn!("Built without http feature - ignoring BLOG_STORE_URL");
            }
            in_memory_store(config.seed_demo)
        };

        tracing::info!("Application state initialized");

        Self { store, editor }
    }
}

#[cfg(feature = "http")]
fn http_store_config(url: &str, config: &AppConfig) -> HttpStoreConfig {
    let mut store_config = HttpStoreConfig::new(url);
    store_config.timeout = config.store_timeout;
    store_config
}

fn in_memory_store(seed_demo: bool) -> Arc<dyn PostStore> {
    if !seed_demo {
        return Arc::new(InMemoryPostStore::new());
    }

    let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let welcome = Post::new(
        "Welcome to Inkpost",
        "Inkpost",
        "<p>Write your first post with <strong>new</strong>.</p>",
        timestamp,
    );
    Arc::new(InMemoryPostStore::with_posts(vec![welcome]))
}
