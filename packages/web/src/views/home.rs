//! Home page: the signed-in landing view.

use dioxus::prelude::*;
use ui::{use_session, LogoutButton};

use crate::Route;

/// Home page component.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // The route table carries no auth gate, so the view itself turns
    // anonymous visitors away once the startup restore has settled.
    if !session.loading() && !session.is_authenticated() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    if session.loading() {
        return rsx! {
            div {
                style: "display: flex; align-items: center; justify-content: center; min-height: 100vh; background: #ffffff;",
                p {
                    style: "color: #787774; font-size: 0.9375rem;",
                    "Restoring session..."
                }
            }
        };
    }

    let state = session.state();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem; background: #ffffff;",

            if let Some(ref user) = state.user {
                div {
                    style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 480px;",

                    h1 {
                        style: "margin-bottom: 0.25rem; color: #37352f; font-weight: 700; font-size: 1.5rem;",
                        "Welcome, {user.username}"
                    }

                    if let Some(ref email) = user.email {
                        p {
                            style: "color: #787774; font-size: 0.9375rem;",
                            "Email: {email}"
                        }
                    }

                    if let Some(ref roles) = user.roles {
                        p {
                            style: "color: #787774; font-size: 0.9375rem;",
                            "Roles: "
                            {roles.join(", ")}
                        }
                    }

                    div {
                        style: "margin-top: 1rem;",
                        LogoutButton {}
                    }
                }
            } else {
                // Token accepted but the profile has not arrived yet.
                div {
                    style: "display: flex; flex-direction: column; align-items: center; gap: 1rem;",
                    p {
                        style: "color: #787774; font-size: 0.9375rem;",
                        "Signed in."
                    }
                    LogoutButton {}
                }
            }
        }
    }
}
