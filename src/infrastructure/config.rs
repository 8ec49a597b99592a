//! Client configuration
//!
//! Values come from the process environment (a `.env` file is loaded by the
//! binary before this runs). CLI flags override them.

/// Default backend address when `COMMUNITY_API_URL` is unset
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Remote store client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub base_url: String,
    /// Bearer token restoring a previous session
    pub token: Option<String>,
    /// Buffered notifications before the oldest is overwritten
    pub notification_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: normalize_base_url(
                std::env::var("COMMUNITY_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            ),
            token: std::env::var("COMMUNITY_API_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
            notification_capacity: 64,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            token: None,
            notification_capacity: 64,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
