//! Fetch-Verdict: HTTP fetch outcome classification for crawl pipelines
//!
//! This crate performs a single HTTP GET for a URL and reduces whatever the
//! transport reports into a small, closed set of outcomes a crawl scheduler
//! can act on: accept the page, skip it, retry it later, or drop it for good.

pub mod browser;
pub mod config;
pub mod fetcher;
pub mod params;
pub mod status;
pub mod transport;

use thiserror::Error;

/// Failure escaping the fetch taxonomy
///
/// Everything the transport reports in its expected vocabulary is folded into
/// an [`Outcome`]. This error carries conditions outside that vocabulary and
/// fetchers that could not be built.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Unexpected failure fetching {url}: {message}")]
    Unexpected { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Invalid fetcher configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Query parameter conversion errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("Parameter section '{0}' has no '=' separator")]
    MissingSeparator(String),

    #[error("Parameter section '{0}' has an empty key")]
    EmptyKey(String),
}

/// Result type alias for fetch operations
pub type Result<T> = std::result::Result<T, FetchError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for parameter conversion
pub type ParamsResult<T> = std::result::Result<T, ParamsError>;

// Re-export commonly used types
pub use config::FetcherConfig;
pub use fetcher::{FetchResult, Fetcher, Response, Validators};
pub use status::{classify, FetchStatus, Outcome, SkipReason};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportRequest};
