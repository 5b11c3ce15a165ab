//! Color schemes and the theme context.
//!
//! The shell owns the scheme in force: the wall clock picks the default,
//! the navbar toggle flips it, and a signed-in user's choice is persisted
//! through [`api::users::save_theme`]. Components read the current name with
//! [`use_theme`] and resolve it to a [`Palette`] for styling.

use dioxus::prelude::*;
use store::ThemeName;

/// Colors and dimensions for one scheme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub colors: Colors,
    pub sizes: Sizes,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colors {
    pub body_background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub primary: &'static str,
    pub border: &'static str,
}

/// Layout dimensions, identical in both schemes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sizes {
    pub max_width: &'static str,
    pub navbar_height: &'static str,
}

const SIZES: Sizes = Sizes {
    max_width: "860px",
    navbar_height: "60px",
};

pub const LIGHT: Palette = Palette {
    colors: Colors {
        body_background: "#ffffff",
        surface: "#f7f6f3",
        text: "#37352f",
        muted_text: "#787774",
        primary: "#2e6fdb",
        border: "#e3e2dd",
    },
    sizes: SIZES,
};

pub const DARK: Palette = Palette {
    colors: Colors {
        body_background: "#191919",
        surface: "#202020",
        text: "#e8e8e6",
        muted_text: "#9b9a97",
        primary: "#6ea8fe",
        border: "#373737",
    },
    sizes: SIZES,
};

impl Palette {
    /// The palette for a scheme name.
    pub fn of(name: ThemeName) -> &'static Palette {
        match name {
            ThemeName::Light => &LIGHT,
            ThemeName::Dark => &DARK,
        }
    }
}

/// The scheme picked when nothing else has decided: light during waking hours.
pub fn initial_theme() -> ThemeName {
    ThemeName::for_hour(current_hour())
}

/// Current scheme name, provided by the shell.
pub fn use_theme() -> ReadOnlySignal<ThemeName> {
    use_context::<ReadOnlySignal<ThemeName>>()
}

/// The palette matching [`use_theme`].
pub fn use_palette() -> &'static Palette {
    let theme = use_theme();
    Palette::of(theme())
}

#[cfg(target_arch = "wasm32")]
fn current_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

#[cfg(not(target_arch = "wasm32"))]
fn current_hour() -> u32 {
    use chrono::Timelike;
    chrono::Local::now().hour()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lookup_matches_scheme() {
        assert_eq!(Palette::of(ThemeName::Light), &LIGHT);
        assert_eq!(Palette::of(ThemeName::Dark), &DARK);
    }

    #[test]
    fn test_schemes_differ_only_in_color() {
        assert_ne!(LIGHT.colors.body_background, DARK.colors.body_background);
        assert_ne!(LIGHT.colors.text, DARK.colors.text);
        assert_eq!(LIGHT.sizes, DARK.sizes);
    }

    #[test]
    fn test_initial_theme_follows_the_clock() {
        assert_eq!(initial_theme(), ThemeName::for_hour(current_hour()));
    }
}
