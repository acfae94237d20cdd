use std::time::Duration;

use reqwest::Url;

/// Root of the chess.com published-data API.
pub const DEFAULT_BASE_URL: &str = "https://api.chess.com/pub";

/// Sent as `User-Agent` on every request so the upstream can identify us.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "chess-gm-wiki/",
    env!("CARGO_PKG_VERSION"),
    " (grandmaster directory)"
);

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How many times a logical request is attempted, and how long to wait
/// between attempts when the upstream gives no `Retry-After` hint.
///
/// The wait before retrying after attempt `n` (1-based) is `base_delay * n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
        }
    }
}

/// Settings for a [`ChessClient`](crate::ChessClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl ClientConfig {
    /// Point the client at another deployment of the API (a mirror, a test server).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Per-attempt request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}
