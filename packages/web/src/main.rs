use dioxus::prelude::*;

use settings::Settings;
use ui::{use_auth, AuthProvider, AuthState};
use views::{Login, NotFound, Protected, Surfaces};

mod session;
mod settings;
mod share;
mod sheet;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login?:redirect")]
    Login { redirect: String },
    #[layout(Protected)]
        #[route("/")]
        Surfaces {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let (settings, load_error) = match Settings::new() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    dioxus::logger::init(settings.log.tracing_level()).ok();
    if let Some(e) = load_error {
        tracing::warn!("Failed to load settings, using defaults: {}", e);
    }

    dioxus::LaunchBuilder::new().with_context(settings).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            SessionLoader {}
            Router::<Route> {}
        }
    }
}

/// Resolves the remembered identity once the app has mounted.
#[component]
fn SessionLoader() -> Element {
    let mut auth = use_auth();

    use_effect(move || {
        auth.set(AuthState::resolved(session::resolve_user()));
    });

    rsx! {}
}
