//! Bookings page - the signed-in user's reservations

use dioxus::prelude::*;

use crate::components::ErrorBanner;
use crate::routes::Route;
use crate::types::{Reservation, ReservationStatus};

/// Reservations of the signed-in user.
///
/// The route itself is not guarded; without a session the page shows a
/// sign-in prompt instead of redirecting.
#[component]
pub fn Bookings() -> Element {
    let reservations = use_server_future(fetch_my_reservations)?;

    rsx! {
        div {
            class: "container mx-auto px-4 py-8",
            h1 { class: "text-3xl font-bold mb-6", "My Bookings" }

            match reservations.value().as_ref().as_deref() {
                Some(Ok(Some(reservations))) if !reservations.is_empty() => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow divide-y divide-gray-200",
                        for reservation in reservations.iter() {
                            ReservationRow {
                                key: "{reservation.id}",
                                reservation: reservation.clone(),
                            }
                        }
                    }
                },
                Some(Ok(Some(_))) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow p-6",
                        p { class: "text-gray-600", "Your bookings will appear here" }
                    }
                },
                Some(Ok(None)) => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow p-6 text-center",
                        p { class: "text-gray-600 mb-4", "Sign in to see your bookings." }
                        Link {
                            to: Route::Login {},
                            class: "inline-block bg-blue-600 text-white px-6 py-2 rounded-lg hover:bg-blue-700 transition",
                            "Login"
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    ErrorBanner { message: "Unable to load bookings: {e}" }
                },
                None => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow divide-y divide-gray-200",
                        for i in 0..3 {
                            div {
                                key: "{i}",
                                class: "p-4 animate-pulse",
                                div { class: "h-4 bg-gray-200 rounded w-1/3 mb-2" }
                                div { class: "h-3 bg-gray-100 rounded w-1/4" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ReservationRowProps {
    reservation: Reservation,
}

#[component]
fn ReservationRow(props: ReservationRowProps) -> Element {
    let reservation = &props.reservation;
    let badge = status_badge_class(reservation.status);
    let booked_line = format!(
        "Booked {} as {}",
        reservation.created_at.format("%Y-%m-%d %H:%M UTC"),
        reservation.actor_type.label()
    );
    let pending_hold = match (reservation.status, reservation.expires_at) {
        (ReservationStatus::Pending, Some(expires_at)) => {
            Some(format!("Hold expires {}", expires_at.format("%H:%M UTC")))
        }
        _ => None,
    };
    let status_label = reservation.status.label();

    rsx! {
        div {
            class: "p-4 flex items-start justify-between",
            div {
                p {
                    class: "text-sm font-medium text-gray-900",
                    if reservation.use_own_court {
                        "Own court booking"
                    } else {
                        "Court booking"
                    }
                }
                p { class: "text-sm text-gray-500", "{booked_line}" }
                if reservation.is_recurring {
                    p { class: "text-xs text-gray-400 mt-1", "Recurring booking" }
                }
                if let Some(hold) = pending_hold {
                    p { class: "text-xs text-amber-600 mt-1", "{hold}" }
                }
            }
            span {
                class: "px-2.5 py-1 rounded-full text-xs font-medium {badge}",
                "{status_label}"
            }
        }
    }
}

fn status_badge_class(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "bg-amber-100 text-amber-700",
        ReservationStatus::Paid => "bg-green-100 text-green-700",
        ReservationStatus::Cancelled => "bg-gray-100 text-gray-600",
        ReservationStatus::Refunded => "bg-blue-100 text-blue-700",
    }
}

/// Fetch the current user's reservations; `None` means no session.
#[server]
async fn fetch_my_reservations() -> Result<Option<Vec<Reservation>>, ServerFnError> {
    use crate::api::ApiClient;
    use crate::auth::session_token;
    use crate::config;

    let Some(token) = session_token().await? else {
        return Ok(None);
    };

    let client = ApiClient::new(config::api_base_url()).with_token(token);
    let reservations = client.get("/venues/reservations/my").await.map_err(|e| {
        tracing::warn!(error = %e, "failed to fetch reservations");
        ServerFnError::new(e.to_string())
    })?;

    Ok(Some(reservations))
}
