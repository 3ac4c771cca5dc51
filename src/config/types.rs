use serde::Deserialize;
use std::time::Duration;

/// Desktop browser user agent sent when none is configured
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/37.0.2062.102 Safari/537.36";

/// Total request timeout used when none is configured (milliseconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Redirect hops followed when none is configured
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

/// Fetcher behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// User agent sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout (milliseconds)
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,

    /// Maximum redirect hops the transport follows
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,
}

impl FetcherConfig {
    /// Returns the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns a copy with a different user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns a copy with a different timeout
    ///
    /// Durations beyond `u64::MAX` milliseconds saturate.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}
