//! Profile screen with sign-out.

use dioxus::prelude::*;
use ui::{use_palette, use_session, SessionStatus};

#[component]
pub fn User() -> Element {
    let mut session = use_session();
    let palette = use_palette();
    let mut busy = use_signal(|| false);

    let handle_sign_out = move |_| {
        spawn(async move {
            busy.set(true);
            match api::auth::sign_out().await {
                // The guard redirects once the session turns empty
                Ok(()) => session.set(SessionStatus::Live(None)),
                Err(err) => tracing::warn!("sign out failed: {err}"),
            }
            busy.set(false);
        });
    };

    let status = session();
    let Some(record) = status.record() else {
        return rsx! {};
    };

    rsx! {
        section { class: "screen screen-user",
            h1 { "{record.display_name()}" }
            if let Some(email) = record.email.as_deref() {
                p {
                    style: "color: {palette.colors.muted_text};",
                    "{email}"
                }
            }
            p {
                style: "color: {palette.colors.muted_text};",
                "Account {record.uid}"
            }
            if !status.is_live() {
                p {
                    style: "color: {palette.colors.muted_text};",
                    "Waiting for the server to confirm this session."
                }
            }
            button {
                class: "button-secondary",
                disabled: busy(),
                onclick: handle_sign_out,
                "Sign out"
            }
        }
    }
}
