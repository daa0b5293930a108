//! Referee match console

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{ErrorBanner, LoadingSpinner};
use crate::types::{MatchEvent, MatchPhase};

/// Outcome of a referee action (start / record event / finalize).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConsoleOutcome {
    Done,
    /// No session, or the backend rejected the credentials.
    NotSignedIn,
    /// The backend refused the action (wrong match state, bad sequence).
    Rejected(String),
}

/// Referee console for a single match: derived phase, event timeline and
/// the start / record / finalize actions.
#[component]
pub fn MatchConsole(match_id: String) -> Element {
    let id = match_id.clone();
    let mut events = use_server_future(move || fetch_match_events(id.clone()))?;

    let mut error = use_signal(|| None::<String>);
    let mut is_pending = use_signal(|| false);
    let mut note = use_signal(String::new);

    let run_action = {
        let match_id = match_id.clone();
        move |action: ConsoleAction| {
            let match_id = match_id.clone();
            let next_seq = match events.value().as_ref().as_deref() {
                Some(Ok(log)) => log.iter().map(|e| e.seq).max().unwrap_or(0) + 1,
                _ => 1,
            };
            let event_note = note().trim().to_string();

            spawn(async move {
                is_pending.set(true);
                error.set(None);

                let result = match action {
                    ConsoleAction::Start => start_match(match_id).await,
                    ConsoleAction::RecordEvent(kind) => {
                        record_match_event(match_id, kind, next_seq, event_note).await
                    }
                    ConsoleAction::Finalize => finalize_match(match_id).await,
                };

                match result {
                    Ok(ConsoleOutcome::Done) => {
                        note.set(String::new());
                        events.restart();
                    }
                    Ok(ConsoleOutcome::NotSignedIn) => {
                        error.set(Some("Sign in as the assigned referee to do that.".to_string()))
                    }
                    Ok(ConsoleOutcome::Rejected(detail)) => error.set(Some(detail)),
                    Err(e) => error.set(Some(e.to_string())),
                }

                is_pending.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "container mx-auto px-4 py-8",
            h1 { class: "text-3xl font-bold mb-6", "Match Console" }

            if let Some(err) = error() {
                ErrorBanner { message: "{err}" }
            }

            match events.value().as_ref().as_deref() {
                Some(Ok(log)) => rsx! {
                    ConsoleBody {
                        log: log.clone(),
                        is_pending: is_pending(),
                        note: note(),
                        on_note: move |v: String| note.set(v),
                        on_action: run_action,
                    }
                },
                Some(Err(e)) => rsx! {
                    ErrorBanner { message: "Unable to load match: {e}" }
                },
                None => rsx! {
                    div {
                        class: "bg-white rounded-lg shadow p-6",
                        LoadingSpinner {}
                    }
                }
            }
        }
    }
}

/// Referee actions available from the console.
#[derive(Clone, Debug, PartialEq)]
enum ConsoleAction {
    Start,
    RecordEvent(String),
    Finalize,
}

#[derive(Props, Clone, PartialEq)]
struct ConsoleBodyProps {
    log: Vec<MatchEvent>,
    is_pending: bool,
    note: String,
    on_note: EventHandler<String>,
    on_action: EventHandler<ConsoleAction>,
}

#[component]
fn ConsoleBody(props: ConsoleBodyProps) -> Element {
    let phase = MatchPhase::from_events(&props.log);
    let phase_badge = match phase {
        MatchPhase::Scheduled => "bg-gray-100 text-gray-600",
        MatchPhase::Live => "bg-green-100 text-green-700",
        MatchPhase::Final => "bg-blue-100 text-blue-700",
    };
    let phase_label = phase.label();

    rsx! {
        div {
            class: "bg-white rounded-lg shadow p-6",

            div {
                class: "flex items-center justify-between mb-6",
                span {
                    class: "px-3 py-1 rounded-full text-sm font-medium {phase_badge}",
                    "{phase_label}"
                }
                div {
                    class: "flex items-center gap-2",
                    if phase == MatchPhase::Scheduled {
                        button {
                            class: "px-4 py-2 bg-green-600 text-white rounded-md hover:bg-green-700 disabled:opacity-50",
                            disabled: props.is_pending,
                            onclick: move |_| props.on_action.call(ConsoleAction::Start),
                            "Start Match"
                        }
                    }
                    if phase == MatchPhase::Live {
                        button {
                            class: "px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50",
                            disabled: props.is_pending,
                            onclick: move |_| props.on_action.call(ConsoleAction::Finalize),
                            "Final Whistle"
                        }
                    }
                }
            }

            if phase == MatchPhase::Live {
                div {
                    class: "mb-6 p-4 bg-gray-50 rounded-lg",
                    p { class: "text-sm font-medium text-gray-700 mb-2", "Record event" }
                    div {
                        class: "flex flex-wrap items-center gap-2",
                        input {
                            r#type: "text",
                            value: "{props.note}",
                            oninput: move |e| props.on_note.call(e.value()),
                            placeholder: "Optional note (player, minute, ...)",
                            class: "flex-1 min-w-48 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        }
                        for kind in ["GOAL", "CARD", "SUBSTITUTION"] {
                            button {
                                key: "{kind}",
                                class: "px-3 py-2 bg-gray-200 text-gray-800 text-sm rounded-md hover:bg-gray-300 disabled:opacity-50",
                                disabled: props.is_pending,
                                onclick: move |_| props.on_action.call(ConsoleAction::RecordEvent(kind.to_string())),
                                "{kind}"
                            }
                        }
                    }
                }
            }

            if props.log.is_empty() {
                p { class: "text-gray-600", "No events yet. The timeline will appear here." }
            } else {
                ol {
                    class: "divide-y divide-gray-100",
                    for event in props.log.iter() {
                        EventRow { key: "{event.id}", event: event.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn EventRow(event: MatchEvent) -> Element {
    let when = event.ts.format("%H:%M:%S").to_string();
    let summary = event
        .payload
        .get("note")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    rsx! {
        li {
            class: "py-3 flex items-center gap-4",
            span { class: "text-xs font-mono text-gray-400 w-8", "#{event.seq}" }
            span { class: "text-xs text-gray-400 w-20", "{when}" }
            span { class: "text-sm font-medium text-gray-900", "{event.kind}" }
            if !summary.is_empty() {
                span { class: "text-sm text-gray-500", "{summary}" }
            }
        }
    }
}

// ============================================================================
// Server functions
// ============================================================================

/// Fetch the match event log.
///
/// The log is readable without a session; only the referee actions need
/// credentials. A token is attached when one exists so the backend sees the
/// same caller on reads and writes.
#[server]
async fn fetch_match_events(match_id: String) -> Result<Vec<MatchEvent>, ServerFnError> {
    use crate::api::ApiClient;
    use crate::auth::session_token;
    use crate::config;

    let client =
        ApiClient::new(config::api_base_url()).with_optional_token(session_token().await?);
    client
        .get(&format!("/matches/{match_id}/events"))
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "failed to fetch match events");
            ServerFnError::new(e.to_string())
        })
}

/// Start the match (assigned referee only).
#[server]
async fn start_match(match_id: String) -> Result<ConsoleOutcome, ServerFnError> {
    console_post(format!("/matches/{match_id}/start"), serde_json::json!({})).await
}

/// Append an event to the match log with the next sequence number.
#[server]
async fn record_match_event(
    match_id: String,
    kind: String,
    seq: i32,
    note: String,
) -> Result<ConsoleOutcome, ServerFnError> {
    let payload = if note.is_empty() {
        serde_json::json!({})
    } else {
        serde_json::json!({ "note": note })
    };

    console_post(
        format!("/matches/{match_id}/events"),
        serde_json::json!({
            "seq": seq,
            "ts": chrono::Utc::now(),
            "type": kind,
            "payload": payload,
        }),
    )
    .await
}

/// Finalize the match.
#[server]
async fn finalize_match(match_id: String) -> Result<ConsoleOutcome, ServerFnError> {
    console_post(format!("/matches/{match_id}/finalize"), serde_json::json!({})).await
}

/// Shared POST-and-classify helper for the console actions.
#[cfg(feature = "server")]
async fn console_post(
    path: String,
    body: serde_json::Value,
) -> Result<ConsoleOutcome, ServerFnError> {
    use crate::api::{ApiClient, ApiError, StatusKind};
    use crate::auth::session_token;
    use crate::config;

    let Some(token) = session_token().await? else {
        return Ok(ConsoleOutcome::NotSignedIn);
    };

    let client = ApiClient::new(config::api_base_url()).with_token(token);
    match client.post::<_, serde_json::Value>(&path, &body).await {
        Ok(_) => Ok(ConsoleOutcome::Done),
        Err(err) => match err.kind() {
            StatusKind::Unauthorized => Ok(ConsoleOutcome::NotSignedIn),
            StatusKind::Validation | StatusKind::NotFound | StatusKind::Other => {
                Ok(ConsoleOutcome::Rejected(match &err {
                    ApiError::Status { detail, .. } => detail.clone(),
                    other => other.to_string(),
                }))
            }
            _ => {
                tracing::error!(error = %err, "match console action failed");
                Err(ServerFnError::new(err.to_string()))
            }
        },
    }
}
