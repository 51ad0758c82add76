//! # Token persistence — the one durable piece of session state
//!
//! The client keeps exactly one value across reloads: the raw bearer token,
//! stored under the [`TOKEN_KEY`] key. The user profile is transient and gets
//! refetched when the session is restored, so nothing else is persisted.
//!
//! [`TokenStore`] abstracts over where that key lives. Implementations live in
//! sibling modules: [`crate::memory`] for native targets and tests, and
//! `crate::local_storage` (behind the `web` feature) for the browser's
//! localStorage. An absent or empty value means logged out.

/// Storage key holding the raw bearer token string.
pub const TOKEN_KEY: &str = "token";

/// Interface for loading, saving and clearing the persisted bearer token.
pub trait TokenStore: Send + Sync {
    /// The stored token, if any. Callers treat an empty string as absent.
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn store(&self, token: &str);

    /// Remove the stored token.
    fn clear(&self);
}
