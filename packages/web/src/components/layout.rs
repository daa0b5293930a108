//! Layout wrapper shared by all routes

use dioxus::prelude::*;

use super::SiteNav;
use crate::routes::Route;

/// Shell around every routed view: navigation bar on top, page below.
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50",

            SiteNav {}

            main {
                Outlet::<Route> {}
            }
        }
    }
}
