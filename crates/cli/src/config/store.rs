//! Storefront Config

use std::time::Duration;

use clap::Args;
use storefront::csrf::DEFAULT_CSRF_COOKIE;

/// Storefront connection settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Storefront root URL
    #[arg(long, env = "STOREFRONT_URL", default_value = "http://localhost:8000")]
    pub base_url: String,

    /// Anti-forgery token; fetched from the token page when omitted
    #[arg(long, env = "STOREFRONT_CSRF_TOKEN", hide_env_values = true)]
    pub csrf_token: Option<String>,

    /// Cookie the storefront keeps its anti-forgery token in
    #[arg(long, env = "STOREFRONT_CSRF_COOKIE", default_value = DEFAULT_CSRF_COOKIE)]
    pub csrf_cookie: String,

    /// Page loaded to obtain a session and anti-forgery token
    #[arg(long, env = "STOREFRONT_TOKEN_PAGE", default_value = "/")]
    pub token_page: String,

    /// Request timeout in milliseconds; the HTTP client default when omitted
    #[arg(long, env = "STOREFRONT_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,

    /// How long notifications stay visible, in milliseconds
    #[arg(
        long,
        env = "STOREFRONT_NOTIFICATION_TIMEOUT_MS",
        default_value_t = 3_000_u64
    )]
    pub notification_timeout_ms: u64,
}

impl StoreConfig {
    /// Request timeout, if one was configured.
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Notification lifetime.
    #[must_use]
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }
}
