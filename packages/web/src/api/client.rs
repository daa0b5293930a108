//! HTTP client for making requests to the booking REST API

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Classification of a non-success API status.
///
/// Server functions map these onto user-facing outcomes (invalid phone,
/// rate-limited, ...) instead of leaking raw status codes into pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// 400 - malformed request (missing phone, bad payload)
    Validation,
    /// 401/403 - missing or rejected credentials, invalid OTP
    Unauthorized,
    /// 404
    NotFound,
    /// 429 - auth endpoints are rate limited per client IP
    RateLimited,
    /// 5xx
    Server,
    /// Anything else
    Other,
}

impl StatusKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => StatusKind::Validation,
            401 | 403 => StatusKind::Unauthorized,
            404 => StatusKind::NotFound,
            429 => StatusKind::RateLimited,
            500..=599 => StatusKind::Server,
            _ => StatusKind::Other,
        }
    }
}

/// Error type for API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {detail}")]
    Status {
        status: u16,
        kind: StatusKind,
        detail: String,
    },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Status classification, treating transport failures as server-side.
    pub fn kind(&self) -> StatusKind {
        match self {
            ApiError::Status { kind, .. } => *kind,
            _ => StatusKind::Server,
        }
    }
}

/// Error body shape used by the backend (`{"detail": ...}`).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Best-effort human-readable message from an error response body.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(s),
        }) => s,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => "Request failed".to_string(),
    }
}

/// REST client for the booking API
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a new client against the given base URL (`.../api/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Attach a bearer token when one is available, for endpoints that are
    /// readable anonymously but richer with credentials.
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token;
        self
    }

    /// GET a JSON resource.
    pub async fn get<R>(&self, path: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        self.get_with_query(path, &[]).await
    }

    /// GET a JSON resource with query parameters.
    pub async fn get_with_query<R>(&self, path: &str, query: &[(&str, &str)]) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let mut req = self.client.get(format!("{}{}", self.base_url, path));
        if !query.is_empty() {
            req = req.query(query);
        }
        self.send(req).await
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let req = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        self.send(req).await
    }

    async fn send<R>(&self, mut req: reqwest::RequestBuilder) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        if let Some(token) = &self.auth_token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                kind: StatusKind::from_status(status.as_u16()),
                detail: error_detail(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification_covers_auth_taxonomy() {
        assert_eq!(StatusKind::from_status(400), StatusKind::Validation);
        assert_eq!(StatusKind::from_status(401), StatusKind::Unauthorized);
        assert_eq!(StatusKind::from_status(403), StatusKind::Unauthorized);
        assert_eq!(StatusKind::from_status(404), StatusKind::NotFound);
        assert_eq!(StatusKind::from_status(429), StatusKind::RateLimited);
        assert_eq!(StatusKind::from_status(500), StatusKind::Server);
        assert_eq!(StatusKind::from_status(503), StatusKind::Server);
        assert_eq!(StatusKind::from_status(302), StatusKind::Other);
    }

    #[test]
    fn optional_token_only_attaches_when_present() {
        let anonymous = ApiClient::new("http://localhost").with_optional_token(None);
        assert!(anonymous.auth_token.is_none());

        let signed_in =
            ApiClient::new("http://localhost").with_optional_token(Some("token".to_string()));
        assert_eq!(signed_in.auth_token.as_deref(), Some("token"));
    }

    #[test]
    fn detail_extraction_handles_backend_shapes() {
        assert_eq!(error_detail(r#"{"detail": "Invalid OTP"}"#), "Invalid OTP");
        // FastAPI validation errors carry structured detail
        assert_eq!(
            error_detail(r#"{"detail": [{"loc": ["body", "phone"]}]}"#),
            r#"[{"loc":["body","phone"]}]"#
        );
        assert_eq!(error_detail("gateway timeout"), "gateway timeout");
        assert_eq!(error_detail(""), "Request failed");
    }
}
