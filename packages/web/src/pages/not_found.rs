//! Fallback view for unmatched routes

use dioxus::prelude::*;

use crate::routes::Route;

/// Rendered for any path outside the known route set.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div {
            class: "container mx-auto px-4 py-16 text-center",
            h1 { class: "text-3xl font-bold mb-4", "Page not found" }
            p {
                class: "text-gray-600 mb-8",
                "There is nothing at "
                span { class: "font-mono text-gray-900", "{path}" }
            }
            Link {
                to: Route::Home {},
                class: "text-blue-600 hover:text-blue-700",
                "Back to home"
            }
        }
    }
}
