//! Layout for every route that needs a signed-in user.

use dioxus::prelude::*;
use ui::{use_auth, Redirect, RouteGuard, LOGIN_DESTINATION};

use crate::Route;

#[component]
pub fn Protected() -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        RouteGuard {
            auth: auth(),
            location: route.to_string(),
            on_redirect: move |redirect: Redirect| {
                nav.replace(redirect_route(redirect));
            },
            Outlet::<Route> {}
        }
    }
}

/// Map a guard redirect onto the router.
fn redirect_route(redirect: Redirect) -> Route {
    if redirect.destination != LOGIN_DESTINATION {
        tracing::warn!("Unknown redirect destination {}, using login", redirect.destination);
    }
    Route::Login {
        redirect: redirect.return_to,
    }
}
