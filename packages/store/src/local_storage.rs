//! # localStorage token store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`TokenStore`] implementation used on the
//! **web platform**. It keeps the raw bearer token string under the
//! [`TOKEN_KEY`] key in the browser's localStorage, which is what lets a
//! signed-in session survive a page reload.
//!
//! ## Error handling
//!
//! All trait methods silently swallow storage failures (returning `None` for
//! reads, doing nothing for writes). A browser profile with localStorage
//! disabled degrades to "always logged out" rather than crashing; the server
//! remains the authority on whether a token is valid.

use web_sys::Storage;

use crate::token::{TokenStore, TOKEN_KEY};

/// localStorage-backed TokenStore for the web platform.
///
/// Zero-size and `Clone`-friendly: the `Storage` handle is looked up from the
/// window on every operation, mirroring how the browser itself scopes it.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        self.storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn store(&self, token: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
