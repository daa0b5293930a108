//! JWT claim decoding
//!
//! The backend issues a signed access token on OTP verification. The server
//! functions only need the claims (subject, role, expiry) to populate the
//! session; signature verification stays with the backend that accepts the
//! token.

use base64::Engine;
use serde::Deserialize;

/// Claims carried by the backend's access token.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// User id
    pub sub: String,
    #[serde(default)]
    pub role: Option<String>,
    /// Expiry as a unix timestamp
    #[serde(default)]
    pub exp: Option<i64>,
}

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Invalid JWT format")]
    Format,

    #[error("Failed to decode JWT payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Failed to parse JWT claims: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decode the payload segment of a JWT without verifying the signature.
pub fn decode_claims(token: &str) -> Result<TokenClaims, JwtError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(JwtError::Format);
    }

    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(parts[1])?;
    Ok(serde_json::from_slice(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
        format!(
            "{}.{}.{}",
            engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            engine.encode(payload),
            engine.encode("signature")
        )
    }

    #[test]
    fn decodes_backend_claims() {
        let token = token_with_payload(
            r#"{"sub": "3f0c...", "role": "organizer", "exp": 1756400000}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub, "3f0c...");
        assert_eq!(claims.role.as_deref(), Some("organizer"));
        assert_eq!(claims.exp, Some(1756400000));
    }

    #[test]
    fn missing_optional_claims_are_tolerated() {
        let token = token_with_payload(r#"{"sub": "abc"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.role, None);
        assert_eq!(claims.exp, None);
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!(decode_claims("not-a-jwt"), Err(JwtError::Format)));
        assert!(decode_claims("a.!!!.c").is_err());
    }
}
