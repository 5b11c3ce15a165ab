//! Month overview: one link per day.

use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

use crate::segments::{DayNumber, MonthNumber, YearNumber};
use crate::Route;

#[component]
pub fn Month(year: YearNumber, month: MonthNumber) -> Element {
    let days = days_in_month(year.get(), month.get());

    rsx! {
        section { class: "screen screen-month",
            h1 { "{month.name()} {year}" }
            div { class: "day-grid",
                for day in 1..=days {
                    Link {
                        key: "{day}",
                        class: "day-cell",
                        to: Route::Day { year, month, day: DayNumber::new(day) },
                        "{day}"
                    }
                }
            }
            Link { class: "back-link", to: Route::Year { year }, "Back to {year}" }
        }
    }
}

/// Day count for a month, leap years included.
fn days_in_month(year: u32, month: u8) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year as i32, u32::from(next_month), 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
    }

    #[test]
    fn test_days_in_month_common_lengths() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }
}
