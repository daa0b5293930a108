//! Inline feedback banners

use dioxus::prelude::*;

/// Error banner shown above a page's content
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "mb-4 p-3 bg-red-50 border border-red-200 text-red-700 rounded text-sm",
            "{message}"
        }
    }
}
