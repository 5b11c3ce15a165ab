//! Terms of service screen.

use dioxus::prelude::*;

#[component]
pub fn Terms() -> Element {
    rsx! {
        section { class: "screen screen-legal",
            h1 { "Terms of service" }
            p {
                "Daybook stores the journal entries you write under your "
                "account so they can follow you between browsers."
            }
            p {
                "You keep ownership of everything you write. You can export "
                "or delete your entries at any time, and deleting your "
                "account removes them from our servers."
            }
            p {
                "The service is provided as is, without warranty. Keep a "
                "copy of anything you cannot afford to lose."
            }
        }
    }
}
