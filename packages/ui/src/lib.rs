//! This crate contains the shared UI for the workspace: the session context
//! and the auth widgets built on it.

mod auth;
pub use auth::{use_session, LogoutButton, SessionContext, SessionProvider};

mod service;
pub use service::{make_service, BrowserNavigator};
