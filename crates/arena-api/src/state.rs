//! Shared application state.

use std::sync::Arc;

use arena_content::ContentPack;
use arena_core::slug::SeedSource;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Tables every game setup selects from.
    pub content: Arc<ContentPack>,
    /// Fingerprint of `content`, computed once at startup.
    pub content_fingerprint: Arc<str>,
    /// Source of seeds for newly minted codes.
    pub seed_source: Arc<dyn SeedSource>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(content: ContentPack, seed_source: Arc<dyn SeedSource>) -> Self {
        let content_fingerprint = Arc::from(content.fingerprint());
        Self {
            content: Arc::new(content),
            content_fingerprint,
            seed_source,
        }
    }
}
