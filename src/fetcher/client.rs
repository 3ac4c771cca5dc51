//! Fetch orchestration
//!
//! # Request Flow
//!
//! 1. Send one GET through the transport with the configured timeout and user agent
//! 2. Fold transport conditions into the outcome taxonomy
//! 3. Classify the status code of a clean response
//!
//! | Transport condition | Result |
//! |---------------------|--------|
//! | Not modified | Skip (NotModified) |
//! | Name resolution failure | Retryable, timeout class |
//! | Timeout | Retryable, timeout class |
//! | Runtime error | Skip (TransportRuntime), logged |
//! | Anything else | `Err(FetchError::Unexpected)` |

use super::result::{FetchResult, Response};
use crate::config::{validate, FetcherConfig};
use crate::status::{classify, Outcome, SkipReason};
use crate::transport::{ReqwestTransport, Transport, TransportError, TransportRequest, Validators};
use crate::FetchError;

/// Fetches URLs and classifies what came back
///
/// Holds no per-request state; one fetcher can serve concurrent calls as
/// long as its transport can.
#[derive(Debug, Clone)]
pub struct Fetcher<T = ReqwestTransport> {
    config: FetcherConfig,
    transport: T,
}

impl Fetcher<ReqwestTransport> {
    /// Creates a fetcher backed by a reqwest client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fetch_verdict::{FetcherConfig, Fetcher};
    ///
    /// # async fn run() -> fetch_verdict::Result<()> {
    /// let fetcher = Fetcher::new(FetcherConfig::default())?;
    /// let result = fetcher.fetch("https://example.com/").await?;
    /// println!("{}", result.outcome());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        validate(&config)?;
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> Fetcher<T> {
    /// Creates a fetcher on top of a custom transport
    ///
    /// Fails with `FetchError::Config` if the configuration is out of range.
    pub fn with_transport(config: FetcherConfig, transport: T) -> Result<Self, FetchError> {
        validate(&config)?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches a URL unconditionally
    pub async fn fetch(&self, url: &str) -> Result<FetchResult, FetchError> {
        self.fetch_conditional(url, &Validators::default()).await
    }

    /// Fetches a URL, sending cache validators from a previous fetch
    ///
    /// # Returns
    ///
    /// * `Ok(FetchResult)` - Classified outcome, with the response on success
    /// * `Err(FetchError::Unexpected)` - Transport failed outside the known taxonomy
    pub async fn fetch_conditional(
        &self,
        url: &str,
        validators: &Validators,
    ) -> Result<FetchResult, FetchError> {
        let request = TransportRequest {
            url: url.to_string(),
            timeout: self.config.timeout(),
            user_agent: self.config.user_agent.clone(),
            validators: validators.clone(),
        };

        tracing::trace!("Requesting {} (timeout {:?})", url, request.timeout);

        let raw = match self.transport.get(&request).await {
            Ok(raw) => raw,
            Err(e) => return self.handle_transport_error(url, e),
        };

        let outcome = classify(raw.status);
        tracing::debug!("Fetched {} -> {} ({})", url, raw.status, outcome.label());

        match outcome {
            Outcome::Success => Ok(FetchResult::success(Response::from(raw))),
            Outcome::Skip(reason) => Ok(FetchResult::skipped(reason)),
            failure => Ok(FetchResult::without_response(failure)),
        }
    }

    fn handle_transport_error(
        &self,
        url: &str,
        err: TransportError,
    ) -> Result<FetchResult, FetchError> {
        match err {
            TransportError::NotModified => {
                tracing::debug!("Connection to {} short-circuited: content not modified", url);
                Ok(FetchResult::skipped(SkipReason::NotModified))
            }
            // Reported as a timeout so schedulers that only requeue
            // timeout-class failures still retry the URL.
            TransportError::NameResolution(message) => {
                tracing::debug!("Name resolution failed for {}: {}", url, message);
                Ok(FetchResult::without_response(Outcome::timeout(format!(
                    "Name resolution failed for {}: {}",
                    url, message
                ))))
            }
            TransportError::Timeout(message) => {
                tracing::debug!("Request to {} timed out: {}", url, message);
                Ok(FetchResult::without_response(Outcome::timeout(format!(
                    "Request to {} timed out: {}",
                    url, message
                ))))
            }
            TransportError::Runtime(message) => {
                tracing::error!("Runtime error fetching {}: {}", url, message);
                Ok(FetchResult::skipped(SkipReason::TransportRuntime))
            }
            TransportError::Other(message) => {
                tracing::error!("Unexpected error fetching {}: {}", url, message);
                Err(FetchError::Unexpected {
                    url: url.to_string(),
                    message,
                })
            }
        }
    }
}
