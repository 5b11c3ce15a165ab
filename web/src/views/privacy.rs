//! Privacy policy screen.

use dioxus::prelude::*;

#[component]
pub fn Privacy() -> Element {
    rsx! {
        section { class: "screen screen-legal",
            h1 { "Privacy" }
            p {
                "Entries are stored for your account alone. They are never "
                "shared, sold, or used to train anything."
            }
            p {
                "The only records we keep beyond your data are the request "
                "logs needed to run the service, and those are deleted after "
                "thirty days."
            }
            p {
                "Your email address is used for sign-in and account "
                "recovery, nothing else."
            }
        }
    }
}
