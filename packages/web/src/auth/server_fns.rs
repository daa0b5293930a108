//! Server functions for authentication
//!
//! These run on the server, call the booking API and manage the session.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::AuthUser;

#[cfg(feature = "server")]
use crate::api::{ApiClient, ApiError, StatusKind};
#[cfg(feature = "server")]
use crate::config;

/// Outcome of requesting a one-time code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SendCodeOutcome {
    /// The backend accepted the phone number and dispatched a code.
    Sent,
    /// The backend rejected the phone number.
    InvalidPhone(String),
    /// Too many attempts from this client; try again later.
    RateLimited,
}

/// Outcome of verifying a one-time code.
///
/// Expired codes are deleted backend-side, so they surface as
/// `InvalidCode` with the backend's message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum VerifyOutcome {
    /// Code accepted; a session was established.
    Verified(AuthUser),
    /// Wrong or expired code.
    InvalidCode(String),
    /// Too many attempts from this client; try again later.
    RateLimited,
}

/// Request a one-time code for the given phone number.
#[server]
pub async fn send_otp(phone: String) -> Result<SendCodeOutcome, ServerFnError> {
    #[derive(Serialize)]
    struct Body {
        phone: String,
    }

    #[derive(Deserialize)]
    #[allow(dead_code)]
    struct Response {
        message: String,
        identifier: String,
    }

    let client = ApiClient::new(config::api_base_url());
    match client
        .post::<_, Response>("/auth/start", &Body { phone })
        .await
    {
        Ok(_) => Ok(SendCodeOutcome::Sent),
        Err(err) => match err.kind() {
            StatusKind::Validation => Ok(SendCodeOutcome::InvalidPhone(api_detail(&err))),
            StatusKind::RateLimited => Ok(SendCodeOutcome::RateLimited),
            _ => {
                tracing::error!(error = %err, "failed to request one-time code");
                Err(ServerFnError::new(err.to_string()))
            }
        },
    }
}

/// Verify a one-time code and establish a session.
#[server]
pub async fn verify_otp(phone: String, code: String) -> Result<VerifyOutcome, ServerFnError> {
    #[derive(Serialize)]
    struct Body {
        phone: String,
        otp: String,
    }

    let client = ApiClient::new(config::api_base_url());
    let result = client
        .post::<_, crate::types::AuthResponse>(
            "/auth/verify",
            &Body {
                phone: phone.clone(),
                otp: code,
            },
        )
        .await;

    match result {
        Ok(auth) => {
            let user_id = uuid::Uuid::parse_str(&auth.user_id)
                .map_err(|e| ServerFnError::new(format!("Invalid user id in response: {e}")))?;

            // The token is the source of truth for expiry
            let expires_at = crate::auth::decode_claims(&auth.access_token)
                .ok()
                .and_then(|claims| claims.exp);

            let user = AuthUser {
                user_id,
                phone,
                role: auth.role,
            };

            set_session(&SessionData {
                user: user.clone(),
                access_token: auth.access_token,
                expires_at,
            })
            .await?;

            Ok(VerifyOutcome::Verified(user))
        }
        Err(err) => match err.kind() {
            StatusKind::Unauthorized | StatusKind::Validation => {
                Ok(VerifyOutcome::InvalidCode(api_detail(&err)))
            }
            StatusKind::RateLimited => Ok(VerifyOutcome::RateLimited),
            _ => {
                tracing::error!(error = %err, "failed to verify one-time code");
                Err(ServerFnError::new(err.to_string()))
            }
        },
    }
}

/// Get the current authenticated user from the session.
///
/// A session past its token expiry is flushed and reported as absent.
#[server]
pub async fn current_user() -> Result<Option<AuthUser>, ServerFnError> {
    match get_session().await? {
        Some(data) if session_expired(&data) => {
            clear_session().await?;
            Ok(None)
        }
        Some(data) => Ok(Some(data.user)),
        None => Ok(None),
    }
}

/// Logout - clear the session.
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    clear_session().await
}

// ============================================================================
// Server-only helpers (not exposed as server functions)
// ============================================================================

/// Session payload stored after verification.
#[cfg(feature = "server")]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub(crate) struct SessionData {
    pub user: AuthUser,
    pub access_token: String,
    /// Unix timestamp from the token's `exp` claim, if present
    pub expires_at: Option<i64>,
}

#[cfg(feature = "server")]
fn session_expired(data: &SessionData) -> bool {
    match data.expires_at {
        Some(exp) => chrono::Utc::now().timestamp() >= exp,
        None => false,
    }
}

#[cfg(feature = "server")]
fn api_detail(err: &ApiError) -> String {
    match err {
        ApiError::Status { detail, .. } => detail.clone(),
        other => other.to_string(),
    }
}

/// Bearer token of the current session, for server functions that call
/// authenticated backend endpoints.
#[cfg(feature = "server")]
pub(crate) async fn session_token() -> Result<Option<String>, ServerFnError> {
    Ok(get_session().await?.map(|data| data.access_token))
}

#[cfg(feature = "server")]
const SESSION_KEY: &str = "auth";

#[cfg(feature = "server")]
async fn set_session(data: &SessionData) -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .insert(SESSION_KEY, data)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to set session: {}", e)))?;

    Ok(())
}

#[cfg(feature = "server")]
async fn get_session() -> Result<Option<SessionData>, ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .get(SESSION_KEY)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session data: {}", e)))
}

#[cfg(feature = "server")]
async fn clear_session() -> Result<(), ServerFnError> {
    use tower_sessions::Session;

    let session: Session = dioxus::fullstack::extract()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to get session: {}", e)))?;

    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to clear session: {}", e)))?;

    Ok(())
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn session(expires_at: Option<i64>) -> SessionData {
        SessionData {
            user: AuthUser {
                user_id: Uuid::new_v4(),
                phone: "+1234567890".to_string(),
                role: "organizer".to_string(),
            },
            access_token: "token".to_string(),
            expires_at,
        }
    }

    #[test]
    fn sessions_without_expiry_never_expire() {
        assert!(!session_expired(&session(None)));
    }

    #[test]
    fn sessions_expire_at_their_token_exp() {
        let past = chrono::Utc::now().timestamp() - 60;
        let future = chrono::Utc::now().timestamp() + 3600;
        assert!(session_expired(&session(Some(past))));
        assert!(!session_expired(&session(Some(future))));
    }
}
