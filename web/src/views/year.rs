//! Year overview: one link per month.

use dioxus::prelude::*;

use crate::segments::{MonthNumber, YearNumber};
use crate::Route;

#[component]
pub fn Year(year: YearNumber) -> Element {
    rsx! {
        section { class: "screen screen-year",
            h1 { "{year}" }
            div { class: "month-grid",
                for month in (1..=12).filter_map(MonthNumber::new) {
                    Link {
                        key: "{month}",
                        class: "month-card",
                        to: Route::Month { year, month },
                        "{month.name()}"
                    }
                }
            }
        }
    }
}
