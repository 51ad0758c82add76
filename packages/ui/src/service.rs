use std::sync::Arc;

use api::{HttpTransport, Navigator, SessionService};
use store::ClientConfig;

/// Navigator that rewrites the browser location. Outside the browser it only
/// logs, which is all the native test shells need.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::debug!(path, "navigation requested outside the browser");
        }
    }
}

/// Build the session service for the current platform: localStorage-backed
/// tokens in the browser, in-memory tokens elsewhere.
pub fn make_service() -> SessionService<HttpTransport> {
    let config = ClientConfig::default();
    let tokens: Arc<dyn store::TokenStore> = {
        #[cfg(all(target_arch = "wasm32", feature = "web"))]
        {
            Arc::new(store::LocalStorageStore::new())
        }
        #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
        {
            Arc::new(store::MemoryStore::new())
        }
    };
    SessionService::new(
        HttpTransport::new(&config),
        tokens,
        Arc::new(BrowserNavigator),
        &config,
    )
}
