//! Login page: sign-in form with a sign-up mode on the same page.

use api::{LoginRequest, RegisterRequest};
use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

const INPUT_STYLE: &str =
    "padding: 0.625rem 0.75rem; border: 1px solid #d0d0cd; border-radius: 4px; font-size: 0.9375rem;";
const SUBMIT_STYLE: &str = "padding: 0.625rem 1.25rem; border: none; border-radius: 4px; background-color: #24292e; color: white; font-size: 0.9375rem; font-weight: 500; cursor: pointer;";
const LINK_STYLE: &str = "background: none; border: none; padding: 0; color: #4285f4; font-size: inherit; cursor: pointer;";

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    SignIn,
    SignUp,
}

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut mode = use_signal(|| Mode::SignIn);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Signed-in visitors have nothing to do here.
    if !session.loading() && session.is_authenticated() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let mut switch_mode = move |next: Mode| {
        mode.set(next);
        error.set(None);
        notice.set(None);
    };

    let handle_submit = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let session = session.clone();
            spawn(async move {
                error.set(None);
                notice.set(None);

                let user = username().trim().to_string();
                let pass = password();
                if user.is_empty() || pass.is_empty() {
                    error.set(Some("Username and password are required".to_string()));
                    return;
                }

                loading.set(true);
                match mode() {
                    Mode::SignIn => {
                        match session
                            .login(LoginRequest {
                                username: user,
                                password: pass,
                            })
                            .await
                        {
                            Ok(()) => {
                                nav.push(Route::Home {});
                            }
                            Err(err) => {
                                loading.set(false);
                                error.set(Some(err.message));
                            }
                        }
                    }
                    Mode::SignUp => {
                        let address = email().trim().to_string();
                        if address.is_empty() || !address.contains('@') {
                            loading.set(false);
                            error.set(Some("Please enter a valid email".to_string()));
                            return;
                        }
                        match session
                            .register(RegisterRequest {
                                username: user,
                                email: address,
                                password: pass,
                            })
                            .await
                        {
                            Ok(_) => {
                                loading.set(false);
                                mode.set(Mode::SignIn);
                                password.set(String::new());
                                notice.set(Some(
                                    "Account created, you can sign in now".to_string(),
                                ));
                            }
                            Err(err) => {
                                loading.set(false);
                                error.set(Some(err.message));
                            }
                        }
                    }
                }
            });
        }
    };

    let submit_label = if mode() == Mode::SignIn {
        "Sign in"
    } else {
        "Sign up"
    };

    rsx! {
        div {
            class: "login-container",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem; background: #ffffff;",

            h1 {
                style: "margin-bottom: 0.5rem; color: #37352f; font-weight: 700; font-size: 1.75rem;",
                "Atrium"
            }

            p {
                style: "margin-bottom: 2rem; color: #787774; font-size: 0.9375rem;",
                if mode() == Mode::SignIn {
                    "Sign in to continue"
                } else {
                    "Create your account"
                }
            }

            form {
                onsubmit: handle_submit,
                style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px;",

                if let Some(err) = error() {
                    div {
                        style: "padding: 0.625rem; background: #fdecea; border: 1px solid #f5c6c0; border-radius: 4px; color: #c0392b; font-size: 0.8125rem;",
                        "{err}"
                    }
                }

                if let Some(msg) = notice() {
                    div {
                        style: "padding: 0.625rem; background: #eafaf1; border: 1px solid #bfe8d2; border-radius: 4px; color: #1e8449; font-size: 0.8125rem;",
                        "{msg}"
                    }
                }

                input {
                    style: INPUT_STYLE,
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                if mode() == Mode::SignUp {
                    input {
                        style: INPUT_STYLE,
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                input {
                    style: INPUT_STYLE,
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    style: SUBMIT_STYLE,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        "Please wait..."
                    } else {
                        "{submit_label}"
                    }
                }
            }

            p {
                style: "margin-top: 1.5rem; color: #787774; font-size: 0.875rem;",
                if mode() == Mode::SignIn {
                    "No account yet? "
                    button {
                        style: LINK_STYLE,
                        onclick: move |_| switch_mode(Mode::SignUp),
                        "Sign up"
                    }
                } else {
                    "Already have an account? "
                    button {
                        style: LINK_STYLE,
                        onclick: move |_| switch_mode(Mode::SignIn),
                        "Sign in"
                    }
                }
            }
        }
    }
}
