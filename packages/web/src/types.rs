//! Type definitions for booking API responses
//!
//! These mirror the response models of the REST backend (`/api/v1`). The
//! backend serializes snake_case JSON, so no field renaming is needed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Venue Types
// ============================================================================

/// Structured part of a venue's `location_json` blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl VenueLocation {
    /// One-line summary for cards, falling back to a placeholder.
    pub fn summary(&self) -> String {
        match (&self.address, &self.city) {
            (Some(address), Some(city)) => format!("{address}, {city}"),
            (Some(address), None) => address.clone(),
            (None, Some(city)) => city.clone(),
            (None, None) => "Location details".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub location_json: VenueLocation,
    pub owner_user_id: String,
}

impl Venue {
    /// Placeholder card shown when the backend has no venues yet.
    pub fn sample() -> Self {
        Self {
            id: "sample".to_string(),
            name: "Sample Venue".to_string(),
            location_json: VenueLocation::default(),
            owner_user_id: String::new(),
        }
    }
}

// ============================================================================
// Reservation Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Individual,
    Company,
    School,
    Academy,
}

impl ActorType {
    pub fn label(&self) -> &'static str {
        match self {
            ActorType::Individual => "Individual",
            ActorType::Company => "Company",
            ActorType::School => "School",
            ActorType::Academy => "Academy",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Paid,
    Cancelled,
    Refunded,
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Paid => "Paid",
            ReservationStatus::Cancelled => "Cancelled",
            ReservationStatus::Refunded => "Refunded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub slot_id: Option<String>,
    pub booked_by_user_id: String,
    pub actor_type: ActorType,
    pub status: ReservationStatus,
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_pattern: Option<String>,
    #[serde(default)]
    pub recurrence_end_date: Option<DateTime<Utc>>,
    pub use_own_court: bool,
    #[serde(default)]
    pub custom_venue_json: Option<serde_json::Value>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Match Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub id: String,
    pub match_id: String,
    pub seq: i32,
    pub ts: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Match lifecycle phase as seen from the console.
///
/// The events endpoint is the only read surface, so the phase is derived
/// from the event log rather than fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    Scheduled,
    Live,
    Final,
}

impl MatchPhase {
    pub fn from_events(events: &[MatchEvent]) -> Self {
        if events.iter().any(|e| e.kind == "FINAL_WHISTLE") {
            MatchPhase::Final
        } else if events.iter().any(|e| e.kind == "KICKOFF") {
            MatchPhase::Live
        } else {
            MatchPhase::Scheduled
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchPhase::Scheduled => "Scheduled",
            MatchPhase::Live => "Live",
            MatchPhase::Final => "Final",
        }
    }
}

// ============================================================================
// Auth Types
// ============================================================================

/// Response of `POST /auth/verify`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user_id: String,
    pub role: String,
}

/// Session user established after a successful OTP verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub phone: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn venue_decodes_backend_payload() {
        let json = r#"{
            "id": "a1b2",
            "name": "Downtown Arena",
            "location_json": {"address": "12 Main St", "city": "Riyadh", "coordinates": {"lat": 1.0, "lng": 2.0}},
            "owner_user_id": "u1"
        }"#;
        let venue: Venue = serde_json::from_str(json).unwrap();
        assert_eq!(venue.name, "Downtown Arena");
        assert_eq!(venue.location_json.summary(), "12 Main St, Riyadh");
    }

    #[test]
    fn sample_venue_keeps_placeholder_text() {
        let venue = Venue::sample();
        assert_eq!(venue.name, "Sample Venue");
        assert_eq!(venue.location_json.summary(), "Location details");
    }

    #[test]
    fn reservation_statuses_use_backend_spelling() {
        assert_eq!(
            serde_json::from_str::<ReservationStatus>("\"cancelled\"").unwrap(),
            ReservationStatus::Cancelled
        );
        assert_eq!(
            serde_json::to_string(&ReservationStatus::Paid).unwrap(),
            "\"paid\""
        );
    }

    #[test]
    fn match_phase_follows_event_log() {
        let event = |seq: i32, kind: &str| MatchEvent {
            id: format!("e{seq}"),
            match_id: "m1".to_string(),
            seq,
            ts: Utc::now(),
            kind: kind.to_string(),
            payload: serde_json::Value::Null,
        };

        assert_eq!(MatchPhase::from_events(&[]), MatchPhase::Scheduled);
        assert_eq!(
            MatchPhase::from_events(&[event(1, "KICKOFF"), event(2, "GOAL")]),
            MatchPhase::Live
        );
        assert_eq!(
            MatchPhase::from_events(&[
                event(1, "KICKOFF"),
                event(2, "GOAL"),
                event(3, "FINAL_WHISTLE")
            ]),
            MatchPhase::Final
        );
    }
}
