use std::sync::Arc;

use snip_core::UrlStore;

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn UrlStore>,
    base_url: String,
}

impl AppState {
    pub fn new(store: Arc<dyn UrlStore>, public_base_url: impl Into<String>) -> Self {
        Self {
            store,
            base_url: public_base_url.into(),
        }
    }

    pub fn store(&self) -> &dyn UrlStore {
        self.store.as_ref()
    }

    /// Public prefix that short codes are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
