//! Sign-in page view with a name/email form.

use dioxus::prelude::*;
use ui::{use_auth, AuthState};

use crate::session;
use crate::Route;

/// Login page component. `redirect` is the location to return to.
#[component]
pub fn Login(redirect: String) -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let target = return_route(&redirect);

    // If already logged in, go straight back
    if !auth().loading && auth().user.is_some() {
        nav.replace(target.clone());
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);

        let user = match session::user_from_form(&name(), &email()) {
            Ok(user) => user,
            Err(msg) => {
                error.set(Some(msg.to_string()));
                return;
            }
        };
        if let Err(e) = session::store_user(&user) {
            tracing::error!("Failed to remember session: {}", e);
            error.set(Some(e.to_string()));
            return;
        }

        tracing::info!("Signed in as {}", user.display_name());
        auth.set(AuthState::resolved(Some(user)));
        nav.replace(target.clone());
    };

    rsx! {
        div {
            class: "login-page",

            h1 {
                class: "login-title",
                "Sign in"
            }

            p {
                class: "login-subtitle",
                "Sign in to see your surfaces"
            }

            form {
                onsubmit: handle_login,
                class: "login-form",

                if let Some(err) = error() {
                    div {
                        class: "login-error",
                        "{err}"
                    }
                }

                input {
                    class: "login-input",
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    class: "login-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                button {
                    class: "login-btn",
                    r#type: "submit",
                    "Continue"
                }
            }
        }
    }
}

/// Route to return to after signing in. Anything that is not a guarded
/// page falls back to the surfaces page.
fn return_route(redirect: &str) -> Route {
    match redirect.parse::<Route>() {
        Ok(Route::Login { .. }) | Ok(Route::NotFound { .. }) | Err(_) => Route::Surfaces {},
        Ok(route) => route,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_to_guarded_page() {
        assert_eq!(return_route("/"), Route::Surfaces {});
    }

    #[test]
    fn never_returns_to_login_or_unknown_pages() {
        assert_eq!(return_route("/login?redirect=%2F"), Route::Surfaces {});
        assert_eq!(return_route("/no/such/page"), Route::Surfaces {});
        assert_eq!(return_route(""), Route::Surfaces {});
    }
}
