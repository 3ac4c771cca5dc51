//! Transport collaborator for single GET requests
//!
//! The fetcher never talks to the network directly. It hands a
//! [`TransportRequest`] to a [`Transport`] and receives either a
//! [`RawResponse`] or one of the [`TransportError`] conditions.

mod http;

pub use http::ReqwestTransport;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Cache validators from a previous fetch, used for conditional GETs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validators {
    /// Sent as `If-None-Match`
    pub etag: Option<String>,

    /// Sent as `If-Modified-Since`
    pub last_modified: Option<String>,
}

impl Validators {
    /// Returns true if no validator is set
    pub fn is_empty(&self) -> bool {
        self.etag.is_none() && self.last_modified.is_none()
    }
}

/// One GET request as handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub validators: Validators,
}

/// Response as delivered by the transport, before classification
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Final URL after redirects
    pub url: Url,
    pub status: i32,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Conditions a transport reports instead of a response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Conditional GET short-circuited; the cached copy is still valid
    #[error("content not modified")]
    NotModified,

    #[error("name resolution failed: {0}")]
    NameResolution(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    /// Unexpected runtime failure in the middle of a request
    #[error("runtime error: {0}")]
    Runtime(String),

    /// Anything outside the expected vocabulary
    #[error("{0}")]
    Other(String),
}

/// Performs HTTP GET requests on behalf of the fetcher
///
/// Implementations must be safe to share between concurrent fetches.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, request: &TransportRequest) -> Result<RawResponse, TransportError>;
}
