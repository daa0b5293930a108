//! Root application component

use dioxus::prelude::*;

use crate::auth::AuthProvider;
use crate::routes::Route;

/// Root application component
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }

        // Auth context provider wraps the entire app; the shared shell
        // (nav bar, page background) lives in the route layout
        AuthProvider {
            Router::<Route> {}
        }
    }
}
