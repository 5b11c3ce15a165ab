use dioxus::prelude::*;

use ui::{OnlineProvider, SessionProvider};
use views::{Day, Login, Month, Privacy, Register, Search, Start, Terms, User, Year};

mod segments;
mod shell;
mod views;

use segments::{DayNumber, MonthNumber, YearNumber};
use shell::{AppScaffold, RequireAuth};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppScaffold)]
        #[route("/app")]
        Start {},
        #[route("/app/login")]
        Login {},
        #[route("/app/register")]
        Register {},
        #[route("/app/terms")]
        Terms {},
        #[route("/app/privacy")]
        Privacy {},
        #[layout(RequireAuth)]
            #[route("/app/search")]
            Search {},
            #[route("/app/user")]
            User {},
            #[route("/app/:year")]
            Year { year: YearNumber },
            #[route("/app/:year/:month")]
            Month { year: YearNumber, month: MonthNumber },
            #[route("/app/:year/:month/:day")]
            Day { year: YearNumber, month: MonthNumber, day: DayNumber },
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            OnlineProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Unmatched paths keep the chrome up and render no screen.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    // Memoization keeps this at one warning per unmatched path.
    let path = segments.join("/");
    tracing::warn!("no route matches /{path}");
    rsx! {}
}
