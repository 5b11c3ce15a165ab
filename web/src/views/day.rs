//! A single day's entry.

use dioxus::prelude::*;
use ui::use_palette;

use crate::segments::{DayNumber, MonthNumber, YearNumber};
use crate::Route;

#[component]
pub fn Day(year: YearNumber, month: MonthNumber, day: DayNumber) -> Element {
    let palette = use_palette();

    rsx! {
        section { class: "screen screen-day",
            h1 { "{month.name()} {day}, {year}" }
            p {
                style: "color: {palette.colors.muted_text};",
                "No entry for this day yet."
            }
            Link {
                class: "back-link",
                to: Route::Month { year, month },
                "Back to {month.name()} {year}"
            }
        }
    }
}
