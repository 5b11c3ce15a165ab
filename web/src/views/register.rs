//! Account creation screen.

use dioxus::prelude::*;
use ui::{use_palette, use_session, SessionStatus};

use crate::Route;

/// Registration form. The backend signs the new account in, so success lands
/// on the start screen just like a sign-in.
#[component]
pub fn Register() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let palette = use_palette();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    if session().is_authenticated() {
        nav.replace(Route::Start {});
        return rsx! {};
    }

    let handle_register = move |_| {
        spawn(async move {
            error.set(None);
            busy.set(true);
            match api::auth::register(&email(), &password(), &name()).await {
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
            h1 { "Create account" }
            label { class: "form-label", "Name"
                input {
                    class: "form-input",
                    value: name(),
                    oninput: move |evt| {
                        name.set(evt.value());
                        error.set(None);
                    },
                }
            }
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
                onclick: handle_register,
                if busy() { "Creating..." } else { "Create account" }
            }
            p {
                style: "color: {palette.colors.muted_text};",
                "By creating an account you accept the "
                Link { to: Route::Terms {}, "terms" }
                " and the "
                Link { to: Route::Privacy {}, "privacy policy" }
                "."
            }
        }
    }
}
