//! Connectivity indicator for the navbar.

use dioxus::prelude::*;

use crate::icons::{FaCloud, FaCloudArrowUp};
use crate::online::use_online;
use crate::Icon;

/// A small icon that shows the current connectivity.
///
/// - **Online**: cloud icon
/// - **Offline**: cloud-up icon, edits wait on this device
#[component]
pub fn OnlineIndicator() -> Element {
    let online = use_online();

    if online() {
        rsx! {
            span {
                class: "online-indicator online-indicator--online",
                title: "Online",
                Icon { icon: FaCloud, width: 14, height: 14 }
            }
        }
    } else {
        rsx! {
            span {
                class: "online-indicator online-indicator--offline",
                title: "Offline",
                Icon { icon: FaCloudArrowUp, width: 14, height: 14 }
            }
        }
    }
}
