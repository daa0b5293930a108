//! Venues listing page

use dioxus::prelude::*;

use crate::components::{ErrorBanner, VenueCard, VenueCardSkeleton};
use crate::state::SportFilter;
use crate::types::Venue;

/// Venue listing with an optional sport filter.
#[component]
pub fn Venues() -> Element {
    let mut active_filter = use_signal(SportFilter::default);
    let venues = use_server_future(move || fetch_venues(active_filter().query()))?;

    rsx! {
        div {
            class: "container mx-auto px-4 py-8",
            h1 { class: "text-3xl font-bold mb-6", "Venues" }

            // Sport filter tabs
            div {
                class: "flex items-center gap-1 overflow-x-auto mb-6",
                for filter in SportFilter::variants() {
                    {
                        let filter = *filter;
                        let is_active = active_filter() == filter;
                        rsx! {
                            button {
                                key: "{filter:?}",
                                class: if is_active {
                                    "px-4 py-2 rounded-lg text-sm font-medium whitespace-nowrap bg-blue-100 text-blue-700"
                                } else {
                                    "px-4 py-2 rounded-lg text-sm font-medium whitespace-nowrap bg-gray-100 text-gray-600 hover:bg-gray-200"
                                },
                                onclick: move |_| active_filter.set(filter),
                                "{filter.label()}"
                            }
                        }
                    }
                }
            }

            match venues.value().as_ref().as_deref() {
                Some(Ok(venues)) if !venues.is_empty() => rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for venue in venues.iter() {
                            VenueCard {
                                key: "{venue.id}",
                                name: venue.name.clone(),
                                location: venue.location_json.summary(),
                            }
                        }
                    }
                },
                Some(Ok(_)) => rsx! {
                    // Nothing listed yet; keep the placeholder card
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        {
                            let sample = Venue::sample();
                            rsx! {
                                VenueCard {
                                    name: sample.name.clone(),
                                    location: sample.location_json.summary(),
                                }
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    ErrorBanner { message: "Unable to load venues: {e}" }
                },
                None => rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for i in 0..3 {
                            VenueCardSkeleton { key: "{i}" }
                        }
                    }
                }
            }
        }
    }
}

/// Fetch venue summaries, optionally filtered by sport.
#[server]
async fn fetch_venues(sport: Option<String>) -> Result<Vec<Venue>, ServerFnError> {
    use crate::api::ApiClient;
    use crate::config;

    let client = ApiClient::new(config::api_base_url());
    let query: Vec<(&str, &str)> = match sport.as_deref() {
        Some(s) => vec![("sport", s)],
        None => vec![],
    };

    client
        .get_with_query("/venues/", &query)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "failed to fetch venues");
            ServerFnError::new(e.to_string())
        })
}
