//! # API crate — the client-side auth layer for Atrium
//!
//! Everything the frontends need to talk to the backend lives here: the HTTP
//! client wrapper, the error normalization, the wire types, and the session
//! store built on top of them.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`Transport`] seam, reqwest-backed [`HttpTransport`], and the [`HttpClient`] that attaches bearer credentials and unwraps the `{code, message, data}` envelope |
//! | [`error`] | [`HttpError`] and the status-code → user-facing-message mapping |
//! | [`models`] | Envelope and auth payload types (camelCase wire format) |
//! | [`session`] | [`SessionState`], the login/register/logout/fetch/restore operations, and the expired-session observer |
//!
//! The persisted pieces (token storage, client configuration) come from the
//! `store` crate and are re-exported for convenience.

pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::{HttpClient, HttpTransport, RequestOptions, Transport};
pub use error::{ErrorKind, HttpError};
pub use models::{ApiResponse, AuthResponse, LoginRequest, RegisterRequest, UserInfo};
pub use session::{Navigator, SessionService, SessionState, LOGIN_ROUTE};

pub use store::{ClientConfig, TokenStore};

#[cfg(test)]
mod testing;
