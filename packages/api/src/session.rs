//! # Session store
//!
//! [`SessionState`] is the client-held record of authentication: the bearer
//! token (empty means anonymous) and the fetched profile. [`SessionService`]
//! drives it through the five operations — login, register, logout, profile
//! fetch, and the restore that runs at startup.
//!
//! The service owns the HTTP client, the token store, and a [`Navigator`].
//! Operations take `&mut SessionState` rather than holding the state inside
//! the service, so the same logic runs under a reactive signal in the UI and
//! under plain structs in tests.
//!
//! Expired sessions are handled here, not in the HTTP layer: when a call on
//! the authenticated channel comes back with [`ErrorKind::SessionExpired`],
//! the service drops both the in-memory and the persisted token and sends the
//! user back to the login page. Login and register skip the auth header, so
//! that signal cannot originate from them.

use std::sync::Arc;

use serde_json::{json, Value};

use store::{ClientConfig, TokenStore};

use crate::client::{HttpClient, RequestOptions, Transport};
use crate::error::{ErrorKind, HttpError};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, UserInfo};

/// Path of the login page, the destination of every forced sign-out.
pub const LOGIN_ROUTE: &str = "/login";

/// Interface for leaving the current page. The browser implementation
/// rewrites the location; tests record the path.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Client-held authentication state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Bearer token; empty means anonymous.
    pub token: String,
    /// Profile of the signed-in user, once fetched.
    pub user: Option<UserInfo>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    fn clear(&mut self) {
        self.token.clear();
        self.user = None;
    }
}

/// The auth operations, built on the HTTP client.
#[derive(Clone)]
pub struct SessionService<T: Transport> {
    client: HttpClient<T>,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl<T: Transport> SessionService<T> {
    pub fn new(
        transport: T,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        config: &ClientConfig,
    ) -> Self {
        Self {
            client: HttpClient::new(transport, tokens.clone(), config),
            tokens,
            navigator,
        }
    }

    /// Exchange credentials for a token and profile. On success the token is
    /// persisted and the state becomes authenticated; on failure the error
    /// propagates untouched and the state is left as it was. No retry.
    pub async fn login(
        &self,
        state: &mut SessionState,
        credentials: LoginRequest,
    ) -> Result<(), HttpError> {
        let response = self
            .client
            .post::<AuthResponse>(
                "/auth/login",
                Some(json!({
                    "username": credentials.username,
                    "password": credentials.password,
                })),
                RequestOptions::anonymous(),
            )
            .await?;

        let AuthResponse { token, user } = response.data;
        self.tokens.store(&token);
        state.token = token;
        state.user = Some(user);
        Ok(())
    }

    /// Create an account. Returns the auth payload without touching the
    /// session; the new user still has to sign in.
    pub async fn register(&self, details: RegisterRequest) -> Result<AuthResponse, HttpError> {
        let response = self
            .client
            .post::<AuthResponse>(
                "/auth/register",
                Some(json!({
                    "username": details.username,
                    "email": details.email,
                    "password": details.password,
                })),
                RequestOptions::anonymous(),
            )
            .await?;
        Ok(response.data)
    }

    /// Tell the server goodbye, then clear the local session and navigate to
    /// the login page whatever the server answered. The server error, if any,
    /// is still returned after the cleanup.
    pub async fn logout(&self, state: &mut SessionState) -> Result<(), HttpError> {
        let result = self
            .client
            .post::<Value>("/auth/logout", None, RequestOptions::default())
            .await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "logout request failed, clearing local session anyway");
        }

        self.clear_session(state);
        self.navigator.navigate(LOGIN_ROUTE);
        result.map(|_| ())
    }

    /// Fetch the current user and replace the stored profile. On failure the
    /// error propagates; an expired session additionally clears the state and
    /// forces the login page.
    pub async fn fetch_profile(&self, state: &mut SessionState) -> Result<(), HttpError> {
        match self
            .client
            .get::<UserInfo>("/auth/me", RequestOptions::default())
            .await
        {
            Ok(response) => {
                state.user = Some(response.data);
                Ok(())
            }
            Err(err) => {
                if err.kind == ErrorKind::SessionExpired {
                    self.clear_session(state);
                    self.navigator.navigate(LOGIN_ROUTE);
                }
                Err(err)
            }
        }
    }

    /// Startup restore: adopt a previously persisted token and validate it by
    /// fetching the profile. Any failure falls back to the anonymous state —
    /// a stale token is the same as being logged out, and this is the only
    /// operation that absorbs its error.
    pub async fn restore_session(&self, state: &mut SessionState) {
        let Some(token) = self.tokens.load().filter(|token| !token.is_empty()) else {
            return;
        };

        state.token = token;
        if let Err(err) = self.fetch_profile(state).await {
            tracing::debug!(error = %err, "stored token rejected, starting anonymous");
            self.clear_session(state);
        }
    }

    fn clear_session(&self, state: &mut SessionState) {
        state.clear();
        self.tokens.clear();
    }
}
