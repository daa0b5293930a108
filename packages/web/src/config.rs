//! Environment-driven configuration.
//!
//! Everything has a working local default so `dx serve` needs no setup.

/// Base URL of the booking REST API (versioned prefix included).
pub fn api_base_url() -> String {
    std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1".to_string())
}

/// Address the fullstack server binds to.
///
/// Defaults to `0.0.0.0:3000` so the container port mapping works without
/// extra flags.
#[cfg(feature = "server")]
pub fn server_addr() -> std::net::SocketAddr {
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    format!("{host}:{port}")
        .parse()
        .unwrap_or_else(|_| std::net::SocketAddr::from(([0, 0, 0, 0], port)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_url_points_at_local_backend() {
        // Only meaningful when the variable is unset, which is the normal
        // test environment.
        if std::env::var("API_URL").is_err() {
            assert_eq!(api_base_url(), "http://localhost:8000/api/v1");
        }
    }
}
