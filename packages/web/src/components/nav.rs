//! Site navigation component

use dioxus::prelude::*;

use crate::auth::{logout, use_auth};
use crate::routes::Route;

/// Top navigation bar: brand, section links and the session control.
#[component]
pub fn SiteNav() -> Element {
    let auth = use_auth();
    let navigator = use_navigator();

    let handle_logout = move |_| {
        spawn(async move {
            if logout().await.is_ok() {
                auth.clear();
                navigator.push(Route::Home {});
            }
        });
    };

    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center justify-between",

                div {
                    class: "flex items-center gap-6",
                    Link {
                        to: Route::Home {},
                        class: "text-xl font-bold text-blue-700",
                        "Mosab Sport Platform"
                    }

                    div {
                        class: "hidden md:flex items-center gap-1",
                        NavLink { to: Route::Venues {}, label: "Venues" }
                        NavLink { to: Route::Bookings {}, label: "Bookings" }
                    }
                }

                div {
                    class: "flex items-center gap-4",
                    if let Some(user) = auth.user.read().as_ref() {
                        span {
                            class: "text-sm text-gray-600",
                            "{user.phone}"
                        }
                    }
                    if auth.is_authenticated() {
                        button {
                            class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                            onclick: handle_logout,
                            "Logout"
                        }
                    } else {
                        Link {
                            to: Route::Login {},
                            class: "text-sm text-gray-600 hover:text-gray-900 px-3 py-1.5 rounded hover:bg-gray-100",
                            "Login"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-blue-100 text-blue-800"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
