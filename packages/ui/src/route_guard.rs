//! Gate for routes that need a signed-in user.
//!
//! The decision itself is [`evaluate`], a pure function of the auth state and
//! the current location. [`RouteGuard`] renders that decision and hands any
//! redirect back to the caller, who owns the router.

use dioxus::prelude::*;

use crate::auth::AuthState;

/// Destination an unauthenticated visitor is sent to.
pub const LOGIN_DESTINATION: &str = "login";

/// Where to go instead of the guarded content, and where to come back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub destination: String,
    pub return_to: String,
}

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    ShowPlaceholder,
    RenderChildren,
    RedirectTo(Redirect),
}

/// Decide what the guard shows for `auth` while the router is at `location`.
pub fn evaluate(auth: &AuthState, location: &str) -> GuardOutcome {
    if auth.loading {
        return GuardOutcome::ShowPlaceholder;
    }
    match auth.user {
        Some(_) => GuardOutcome::RenderChildren,
        None => GuardOutcome::RedirectTo(Redirect {
            destination: LOGIN_DESTINATION.to_string(),
            return_to: location.to_string(),
        }),
    }
}

/// Renders `children` only for a signed-in user.
///
/// While auth is still resolving a skeleton is shown. Without a user the
/// guard calls `on_redirect` and renders nothing; it never navigates itself.
#[component]
pub fn RouteGuard(
    auth: AuthState,
    location: String,
    on_redirect: EventHandler<Redirect>,
    children: Element,
) -> Element {
    match evaluate(&auth, &location) {
        GuardOutcome::ShowPlaceholder => rsx! { AuthSkeleton {} },
        GuardOutcome::RenderChildren => rsx! { {children} },
        GuardOutcome::RedirectTo(redirect) => {
            tracing::debug!(
                "No user at {}, redirecting to {}",
                redirect.return_to,
                redirect.destination
            );
            on_redirect.call(redirect);
            rsx! {}
        }
    }
}

/// Height and width of each placeholder block.
const SKELETON_BLOCKS: [(&str, &str); 3] = [("2rem", "33%"), ("1rem", "66%"), ("12rem", "100%")];

/// Placeholder blocks shown while the auth check is in flight.
///
/// Sized inline so the placeholder shows up without any stylesheet loaded.
#[component]
pub fn AuthSkeleton() -> Element {
    rsx! {
        div {
            class: "auth-skeleton",
            style: "display: flex; flex-direction: column; gap: 0.75rem; padding: 1.5rem;",
            for (height, width) in SKELETON_BLOCKS {
                div {
                    key: "{height}",
                    class: "auth-skeleton-block",
                    style: "height: {height}; width: {width}; border-radius: 4px; background: #ebeae8;",
                }
            }
        }
    }
}
