//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::{DEFAULT_TTL_SECS, LONG_TTL_SECS};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Default TTL in seconds for volatile cache entries
    pub default_ttl: u64,
    /// TTL in seconds for near-static cache entries
    pub long_ttl: u64,
    /// Timeout in seconds for upstream requests
    pub request_timeout: u64,
    /// Base URL of the platform games API
    pub games_api_base: String,
    /// Base URL of the platform thumbnails API
    pub thumbnails_api_base: String,
    /// Base URL of the platform universe-resolution API
    pub apis_base: String,
    /// Email provider API key; the contact endpoint degrades gracefully when unset
    pub resend_api_key: Option<String>,
    /// Destination address for contact submissions
    pub contact_email: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3001)
    /// - `DEFAULT_TTL_SECS` - Volatile cache TTL in seconds (default: 300)
    /// - `LONG_TTL_SECS` - Near-static cache TTL in seconds (default: 3600)
    /// - `REQUEST_TIMEOUT_SECS` - Upstream request timeout (default: 10)
    /// - `GAMES_API_BASE` / `THUMBNAILS_API_BASE` / `APIS_BASE` - Upstream
    ///   base URL overrides, mainly for tests
    /// - `RESEND_API_KEY` - Email provider key (optional)
    /// - `CONTACT_EMAIL` - Contact destination address
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            default_ttl: env::var("DEFAULT_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            long_ttl: env::var("LONG_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(LONG_TTL_SECS),
            request_timeout: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            games_api_base: env::var("GAMES_API_BASE")
                .unwrap_or_else(|_| "https://games.roblox.com/v1".to_string()),
            thumbnails_api_base: env::var("THUMBNAILS_API_BASE")
                .unwrap_or_else(|_| "https://thumbnails.roblox.com/v1".to_string()),
            apis_base: env::var("APIS_BASE")
                .unwrap_or_else(|_| "https://apis.roblox.com".to_string()),
            resend_api_key: env::var("RESEND_API_KEY").ok().filter(|v| !v.is_empty()),
            contact_email: env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "contato@minigroups.com".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3001,
            default_ttl: DEFAULT_TTL_SECS,
            long_ttl: LONG_TTL_SECS,
            request_timeout: 10,
            games_api_base: "https://games.roblox.com/v1".to_string(),
            thumbnails_api_base: "https://thumbnails.roblox.com/v1".to_string(),
            apis_base: "https://apis.roblox.com".to_string(),
            resend_api_key: None,
            contact_email: "contato@minigroups.com".to_string(),
        }
    }
}
