//! Venue card component

use dioxus::prelude::*;

/// Props for VenueCard
#[derive(Props, Clone, PartialEq)]
pub struct VenueCardProps {
    pub name: String,
    pub location: String,
}

/// Card displaying a single venue summary
#[component]
pub fn VenueCard(props: VenueCardProps) -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow p-6 hover:shadow-lg transition-shadow",
            h2 { class: "text-xl font-semibold mb-2", "{props.name}" }
            p {
                class: "inline-flex items-center gap-1 text-gray-600",
                svg {
                    class: "w-4 h-4",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"
                    }
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M15 11a3 3 0 11-6 0 3 3 0 016 0z"
                    }
                }
                "{props.location}"
            }
        }
    }
}

/// Placeholder card shown while venues load
#[component]
pub fn VenueCardSkeleton() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-lg shadow p-6 animate-pulse",
            div { class: "h-6 bg-gray-200 rounded w-2/3 mb-3" }
            div { class: "h-4 bg-gray-100 rounded w-1/2" }
        }
    }
}
