//! Session context and hooks for the UI.

use api::{
    AuthResponse, HttpError, HttpTransport, LoginRequest, RegisterRequest, SessionService,
    SessionState,
};
use dioxus::prelude::*;

use crate::service::make_service;

/// Reactive session shared through context: the state signal, a loading flag
/// covering the startup restore, and the service the operations run on.
#[derive(Clone)]
pub struct SessionContext {
    state: Signal<SessionState>,
    loading: Signal<bool>,
    service: SessionService<HttpTransport>,
}

impl SessionContext {
    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// True while the startup restore is still running.
    pub fn loading(&self) -> bool {
        *self.loading.read()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    /// Sign in. On success the session signal flips to authenticated.
    pub async fn login(&self, credentials: LoginRequest) -> Result<(), HttpError> {
        let mut session = self.state.peek().clone();
        let result = self.service.login(&mut session, credentials).await;
        let mut state = self.state;
        state.set(session);
        result
    }

    /// Create an account. Does not sign the new user in.
    pub async fn register(&self, details: RegisterRequest) -> Result<AuthResponse, HttpError> {
        self.service.register(details).await
    }

    /// Sign out. The session is anonymous afterwards even if the server call
    /// failed; the error is returned for logging.
    pub async fn logout(&self) -> Result<(), HttpError> {
        let mut session = self.state.peek().clone();
        let result = self.service.logout(&mut session).await;
        let mut state = self.state;
        state.set(session);
        result
    }

    /// Refresh the stored profile from the server.
    pub async fn fetch_profile(&self) -> Result<(), HttpError> {
        let mut session = self.state.peek().clone();
        let result = self.service.fetch_profile(&mut session).await;
        let mut state = self.state;
        state.set(session);
        result
    }

    async fn restore(&self) {
        // peek, not read: this runs inside the provider's resource, and a
        // subscribing read of the signal it writes would re-trigger it.
        let mut session = self.state.peek().clone();
        self.service.restore_session(&mut session).await;
        let mut state = self.state;
        let mut loading = self.loading;
        state.set(session);
        loading.set(false);
    }
}

/// Provider component that owns the session and restores it on startup.
/// Wrap the router with this component to enable authentication.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(SessionState::default);
    let loading = use_signal(|| true);
    let session = use_context_provider(|| SessionContext {
        state,
        loading,
        service: make_service(),
    });

    // One-shot restore of a previously stored token.
    let _ = use_resource(move || {
        let session = session.clone();
        async move {
            session.restore().await;
        }
    });

    rsx! {
        {children}
    }
}

/// Get the session context provided by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Button that signs the user out and sends them to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let mut busy = use_signal(|| false);

    let onclick = move |_| {
        let session = session.clone();
        async move {
            busy.set(true);
            if let Err(err) = session.logout().await {
                tracing::warn!(error = %err, "logout finished with a server error");
            }
            busy.set(false);
        }
    };

    rsx! {
        button {
            class: "{class}",
            style: "padding: 0.5rem 1rem; border: 1px solid #d0d0cd; border-radius: 4px; background: #ffffff; color: #37352f; font-size: 0.875rem; cursor: pointer;",
            disabled: busy(),
            onclick: onclick,
            if busy() {
                "Signing out..."
            } else {
                "{label}"
            }
        }
    }
}
