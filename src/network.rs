//! Backend endpoint configuration.

/// Base URL used when [`API_URL_ENV`] is not set — the local dev gateway.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Environment variable supplying the backend base URL.
pub const API_URL_ENV: &str = "PAPERTRADE_API_URL";

/// Resolve the backend base URL from the environment, falling back to
/// [`DEFAULT_API_URL`].
pub fn api_url_from_env() -> String {
    std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
