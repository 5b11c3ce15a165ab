//! This crate contains all shared UI for the Daybook client.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod theme;
pub use theme::{use_palette, use_theme, Palette};

pub mod online;
pub use online::{use_online, OnlineProvider};

pub mod session;
pub use session::{use_session, SessionProvider, SessionStatus};

mod navbar;
pub use navbar::Navbar;

mod online_indicator;
pub use online_indicator::OnlineIndicator;
