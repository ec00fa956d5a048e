//! Frontend configuration

use web_sys::window;

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Local storage key for the session token
    pub const TOKEN_KEY: &'static str = portfolio_core::TOKEN_KEY;

    /// Shown on the login page after a 401 tore the session down
    pub const SESSION_EXPIRED_NOTICE: &'static str =
        "Your session has expired. Please log in again.";
}

/// Backend API configuration
pub struct ApiConfig;

impl ApiConfig {
    /// Used when neither the build nor the page provide an origin
    pub const FALLBACK_BASE_URL: &'static str = "http://localhost:5000";

    /// Base URL for API calls
    ///
    /// `PORTFOLIO_API_URL` at build time wins, then the page origin.
    pub fn base_url() -> String {
        if let Some(url) = option_env!("PORTFOLIO_API_URL") {
            return url.to_string();
        }

        if let Some(window) = window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }

        Self::FALLBACK_BASE_URL.to_string()
    }
}

/// Logging configuration
pub struct LogConfig;

impl LogConfig {
    pub const fn max_level() -> tracing::Level {
        if cfg!(debug_assertions) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
