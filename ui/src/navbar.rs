use dioxus::prelude::*;
use store::ThemeName;

use crate::icons::{FaMoon, FaSun};
use crate::theme::{use_palette, use_theme};
use crate::{Icon, OnlineIndicator};

/// Top bar: brand, the caller's navigation links, connectivity, theme toggle.
#[component]
pub fn Navbar(on_toggle_theme: EventHandler<()>, children: Element) -> Element {
    let theme = use_theme();
    let palette = use_palette();

    rsx! {
        header {
            class: "navbar",
            style: "height: {palette.sizes.navbar_height}; background-color: {palette.colors.surface}; border-bottom: 1px solid {palette.colors.border}; color: {palette.colors.text};",
            span {
                class: "navbar-brand",
                style: "color: {palette.colors.primary};",
                "Daybook"
            }
            nav { class: "navbar-links", {children} }
            div {
                class: "navbar-status",
                OnlineIndicator {}
                button {
                    class: "theme-toggle",
                    title: "Switch theme",
                    onclick: move |_| on_toggle_theme.call(()),
                    if theme() == ThemeName::Light {
                        Icon { icon: FaMoon, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaSun, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
