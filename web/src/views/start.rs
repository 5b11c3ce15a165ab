//! Landing screen at `/app`.

use chrono::{Datelike, Local};
use dioxus::prelude::*;
use ui::{use_palette, use_session};

use crate::segments::{DayNumber, MonthNumber, YearNumber};
use crate::Route;

#[component]
pub fn Start() -> Element {
    let session = use_session();
    let palette = use_palette();

    let today = Local::now().date_naive();
    let this_year = YearNumber::new(today.year().unsigned_abs());
    let today_route = MonthNumber::new(today.month() as u8).map(|month| Route::Day {
        year: this_year,
        month,
        day: DayNumber::new(today.day()),
    });

    rsx! {
        section { class: "screen screen-start",
            h1 { "Daybook" }
            p {
                style: "color: {palette.colors.muted_text};",
                "A quiet place for one entry a day."
            }
            if session().is_authenticated() {
                div { class: "start-actions",
                    if let Some(route) = today_route {
                        Link { class: "button-primary", to: route, "Write today's entry" }
                    }
                    Link {
                        class: "button-secondary",
                        to: Route::Year { year: this_year },
                        "Browse {this_year}"
                    }
                    Link { class: "button-secondary", to: Route::Search {}, "Search entries" }
                }
            } else {
                div { class: "start-actions",
                    Link { class: "button-primary", to: Route::Login {}, "Sign in" }
                    Link { class: "button-secondary", to: Route::Register {}, "Create account" }
                }
            }
        }
    }
}
