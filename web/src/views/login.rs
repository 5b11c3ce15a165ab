//! Sign-in screen.

use dioxus::prelude::*;
use ui::{use_palette, use_session, SessionStatus};

use crate::Route;

/// Sign-in form. Visitors who are already signed in get bounced to the start
/// screen.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let palette = use_palette();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    if session().is_authenticated() {
        nav.replace(Route::Start {});
        return rsx! {};
    }

    let handle_sign_in = move |_| {
        spawn(async move {
            error.set(None);
            busy.set(true);
            match api::auth::sign_in(&email(), &password()).await {
                Ok(record) => {
                    session.set(SessionStatus::Live(Some(record)));
                    nav.replace(Route::Start {});
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "screen screen-auth",
            h1 { "Sign in" }
            label { class: "form-label", "Email"
                input {
                    class: "form-input",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt| {
                        email.set(evt.value());
                        error.set(None);
                    },
                }
            }
            label { class: "form-label", "Password"
                input {
                    class: "form-input",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt| {
                        password.set(evt.value());
                        error.set(None);
                    },
                }
            }
            if let Some(message) = error() {
                p { class: "form-error", "{message}" }
            }
            button {
                class: "button-primary",
                disabled: busy(),
                onclick: handle_sign_in,
                if busy() { "Signing in..." } else { "Sign in" }
            }
            p {
                style: "color: {palette.colors.muted_text};",
                "New here? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
