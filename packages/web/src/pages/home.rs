//! Landing page

use dioxus::prelude::*;

use crate::routes::Route;

/// Static landing page with the two entry points of the app.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100",
            div {
                class: "container mx-auto px-4 py-16",
                div {
                    class: "text-center",
                    h1 {
                        class: "text-5xl font-bold text-gray-900 mb-4",
                        "Mosab Sport Platform"
                    }
                    p {
                        class: "text-xl text-gray-600 mb-8",
                        "Book courts, manage matches, and generate reports"
                    }
                    div {
                        class: "flex gap-4 justify-center",
                        Link {
                            to: Route::Login {},
                            class: "bg-blue-600 text-white px-6 py-3 rounded-lg hover:bg-blue-700 transition",
                            "Get Started"
                        }
                        Link {
                            to: Route::Venues {},
                            class: "bg-white text-blue-600 px-6 py-3 rounded-lg border border-blue-600 hover:bg-blue-50 transition",
                            "Browse Venues"
                        }
                    }
                }
            }
        }
    }
}
