//! reqwest-backed transport

use super::{RawResponse, Transport, TransportError, TransportRequest};
use crate::config::FetcherConfig;
use crate::FetchError;
use async_trait::async_trait;
use reqwest::header::{IF_MODIFIED_SINCE, IF_NONE_MATCH, USER_AGENT};
use reqwest::{redirect::Policy, Client};
use std::error::Error as StdError;

/// Transport that issues requests through a pooled reqwest client
///
/// Timeout and user agent come from each [`TransportRequest`], so one
/// transport can serve fetchers with different settings.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport whose client follows at most `max_redirects` hops
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .redirect(Policy::limited(config.max_redirects))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, request: &TransportRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .get(&request.url)
            .timeout(request.timeout)
            .header(USER_AGENT, &request.user_agent);

        if let Some(etag) = &request.validators.etag {
            builder = builder.header(IF_NONE_MATCH, etag);
        }
        if let Some(last_modified) = &request.validators.last_modified {
            builder = builder.header(IF_MODIFIED_SINCE, last_modified);
        }

        let response = builder.send().await.map_err(classify_error)?;

        let url = response.url().clone();
        let status = i32::from(response.status().as_u16());
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(classify_error)?;

        Ok(RawResponse {
            url,
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

/// Maps a reqwest error onto the transport taxonomy
///
/// | Condition | Error |
/// |-----------|-------|
/// | Timeout (connect or total) | Timeout |
/// | DNS lookup failure | NameResolution |
/// | Body read or decode failure | Runtime |
/// | Anything else (refused, bad URL, redirect limit) | Other |
fn classify_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if is_name_resolution(&err) {
        TransportError::NameResolution(error_chain(&err))
    } else if err.is_body() || err.is_decode() {
        TransportError::Runtime(error_chain(&err))
    } else {
        TransportError::Other(error_chain(&err))
    }
}

/// Returns true if any error in the source chain is a DNS lookup failure
fn is_name_resolution(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        let message = e.to_string();
        if message.contains("dns error") || message.contains("failed to lookup address") {
            return true;
        }
        current = e.source();
    }
    false
}

/// Joins an error and its sources into one message
///
/// reqwest and hyper already print their sources in `Display`, so a source
/// whose text is already present is not repeated.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(e) = current {
        let part = e.to_string();
        if !message.contains(&part) {
            message.push_str(": ");
            message.push_str(&part);
        }
        current = e.source();
    }
    message
}
