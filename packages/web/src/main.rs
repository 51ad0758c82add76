use dioxus::prelude::*;

use ui::SessionProvider;
use views::{Home, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/home")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    dioxus::launch(App);

    // The bundle runs in the browser; native builds only type-check the tree.
    #[cfg(not(target_arch = "wasm32"))]
    let _ = App;
}

#[component]
fn App() -> Element {
    rsx! {
        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// `/` serves the login page, same as `/login`.
#[component]
fn Root() -> Element {
    rsx! {
        Login {}
    }
}

/// Any unknown path lands back on the login page. The route table carries no
/// auth gate; the views themselves decide who belongs where.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let _ = segments;
    nav.replace(Route::Login {});
    rsx! {}
}
