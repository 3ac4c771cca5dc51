use crate::status::{Outcome, SkipReason};
use crate::transport::{RawResponse, Validators};
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, CONTENT_TYPE, ETAG, LAST_MODIFIED};
use std::borrow::Cow;
use url::Url;

/// A fetched page, owned by the caller once returned
#[derive(Debug, Clone)]
pub struct Response {
    url: Url,
    status: i32,
    headers: HeaderMap,
    body: Vec<u8>,
    fetched_at: DateTime<Utc>,
}

impl Response {
    /// Final URL after redirects
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8, with invalid sequences replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header_str(CONTENT_TYPE.as_str())
    }

    pub fn etag(&self) -> Option<&str> {
        self.header_str(ETAG.as_str())
    }

    pub fn last_modified(&self) -> Option<&str> {
        self.header_str(LAST_MODIFIED.as_str())
    }

    /// Validators to send with the next conditional fetch of this URL
    pub fn validators(&self) -> Validators {
        Validators {
            etag: self.etag().map(str::to_string),
            last_modified: self.last_modified().map(str::to_string),
        }
    }

    fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

impl From<RawResponse> for Response {
    fn from(raw: RawResponse) -> Self {
        Self {
            url: raw.url,
            status: raw.status,
            headers: raw.headers,
            body: raw.body,
            fetched_at: Utc::now(),
        }
    }
}

/// Result of one fetch
///
/// A response is present only when the outcome is [`Outcome::Success`].
/// Skip and failure outcomes never carry a body.
#[derive(Debug, Clone)]
pub struct FetchResult {
    outcome: Outcome,
    response: Option<Response>,
}

impl FetchResult {
    pub(crate) fn success(response: Response) -> Self {
        Self {
            outcome: Outcome::Success,
            response: Some(response),
        }
    }

    pub(crate) fn skipped(reason: SkipReason) -> Self {
        Self {
            outcome: Outcome::Skip(reason),
            response: None,
        }
    }

    /// Wraps a non-success outcome; the response is dropped
    pub(crate) fn without_response(outcome: Outcome) -> Self {
        Self {
            outcome,
            response: None,
        }
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    pub fn into_parts(self) -> (Outcome, Option<Response>) {
        (self.outcome, self.response)
    }
}
