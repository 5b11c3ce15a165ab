//! Entry search screen.

use dioxus::prelude::*;
use ui::use_palette;

#[component]
pub fn Search() -> Element {
    let palette = use_palette();
    let mut query = use_signal(String::new);

    rsx! {
        section { class: "screen screen-search",
            h1 { "Search" }
            input {
                class: "form-input",
                r#type: "search",
                placeholder: "Find an entry...",
                value: query(),
                oninput: move |evt| query.set(evt.value()),
            }
            if query().trim().is_empty() {
                p {
                    style: "color: {palette.colors.muted_text};",
                    "Search looks through every entry in your journal."
                }
            } else {
                p {
                    style: "color: {palette.colors.muted_text};",
                    "No entries match \"{query}\" yet."
                }
            }
        }
    }
}
